//! Account service module
//!
//! This module provides the credential lifecycle:
//! - Registration with duplicate-email prevention
//! - Login with password verification and token issuance
//! - Password reset

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
