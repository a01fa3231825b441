//! Value objects returned by the business services.

pub mod auth_response;

pub use auth_response::{AccountSummary, AuthResponse};
