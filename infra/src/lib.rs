//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the VishConnect
//! backend. It provides the concrete MySQL implementations of the
//! repository traits defined in `vc_core`, plus connection pool
//! construction.
//!
//! The pool is created once at startup and shared for the lifetime of the
//! process; every repository holds a cheap clone of it.

pub mod database;

pub use database::{
    create_pool, MySqlAccountRepository, MySqlFeedbackRepository, MySqlNotificationRepository,
    MySqlProfileRepository,
};
