//! Token claims for JWT-based session credentials.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session token lifetime (1 hour)
pub const TOKEN_EXPIRY_SECONDS: i64 = 3600;

/// Default JWT issuer, overridable through the token service config
pub const JWT_ISSUER: &str = "vishconnect";

/// Claims structure for the JWT payload
///
/// Sessions are stateless: the signed claims are the whole credential,
/// nothing is persisted and nothing can be revoked before expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for a session token
    ///
    /// # Arguments
    ///
    /// * `account_id` - The account's UUID
    /// * `expiry_seconds` - Token lifetime in seconds
    /// * `issuer` - Issuer claim value
    pub fn new_session_token(account_id: Uuid, expiry_seconds: i64, issuer: &str) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(expiry_seconds);

        Self {
            sub: account_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the account ID from the claims
    pub fn account_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_token_claims() {
        let account_id = Uuid::new_v4();
        let claims = Claims::new_session_token(account_id, TOKEN_EXPIRY_SECONDS, JWT_ISSUER);

        assert_eq!(claims.sub, account_id.to_string());
        assert_eq!(claims.exp - claims.iat, TOKEN_EXPIRY_SECONDS);
        assert_eq!(claims.iss, JWT_ISSUER);
        assert!(!claims.is_expired());
        assert_eq!(claims.account_id().unwrap(), account_id);
    }

    #[test]
    fn test_expired_claims() {
        let claims = Claims::new_session_token(Uuid::new_v4(), -10, JWT_ISSUER);
        assert!(claims.is_expired());
    }

    #[test]
    fn test_jti_is_unique_per_token() {
        let account_id = Uuid::new_v4();
        let first = Claims::new_session_token(account_id, TOKEN_EXPIRY_SECONDS, JWT_ISSUER);
        let second = Claims::new_session_token(account_id, TOKEN_EXPIRY_SECONDS, JWT_ISSUER);
        assert_ne!(first.jti, second.jti);
    }
}
