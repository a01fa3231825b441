//! Token service module for JWT session credentials
//!
//! This module handles session token operations:
//! - JWT issuance bound to an account id
//! - Signature and expiry verification

mod config;
mod service;

pub use config::TokenServiceConfig;
pub use service::TokenService;
