// Library exports for route-level testing and the binary

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
