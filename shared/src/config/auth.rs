//! Authentication configuration

use serde::{Deserialize, Serialize};

use super::{ConfigError, Environment};

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Token expiry time in seconds
    pub token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("dev-secret-change-in-production"),
            token_expiry: 3600, // 1 hour
            issuer: String::from("vishconnect"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token expiry in seconds
    pub fn with_expiry_seconds(mut self, seconds: i64) -> Self {
        self.token_expiry = seconds;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "dev-secret-change-in-production"
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,
}

impl AuthConfig {
    /// Create from environment variables
    ///
    /// `JWT_SECRET` must be set outside development; the development
    /// fallback exists only so a fresh checkout runs locally.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.trim().is_empty() => secret,
            _ if Environment::from_env() == Environment::Development => {
                JwtConfig::default().secret
            }
            _ => return Err(ConfigError::missing("JWT_SECRET")),
        };

        let token_expiry = std::env::var("JWT_TOKEN_EXPIRY")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()
            .map_err(|_| ConfigError::invalid("JWT_TOKEN_EXPIRY", "not a number"))?;

        let issuer =
            std::env::var("JWT_ISSUER").unwrap_or_else(|_| JwtConfig::default().issuer);

        Ok(Self {
            jwt: JwtConfig {
                secret,
                token_expiry,
                issuer,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.token_expiry, 3600);
        assert_eq!(config.issuer, "vishconnect");
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret").with_expiry_seconds(120);

        assert_eq!(config.token_expiry, 120);
        assert!(!config.is_using_default_secret());
    }
}
