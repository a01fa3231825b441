//! Configuration for the token service

use crate::domain::entities::token::{JWT_ISSUER, TOKEN_EXPIRY_SECONDS};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Session token expiry in seconds
    pub token_expiry_seconds: i64,
    /// Issuer claim stamped into and required from every token
    pub issuer: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            token_expiry_seconds: TOKEN_EXPIRY_SECONDS,
            issuer: JWT_ISSUER.to_string(),
        }
    }
}

impl TokenServiceConfig {
    /// Create a configuration with the given secret
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }

    /// Override the token expiry
    pub fn with_expiry_seconds(mut self, seconds: i64) -> Self {
        self.token_expiry_seconds = seconds;
        self
    }

    /// Override the issuer claim
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }
}
