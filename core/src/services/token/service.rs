//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing and verifying JWT session tokens
///
/// Tokens are signed with HS256 using the process-wide secret. The secret
/// is loaded once at startup and never mutated afterwards.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Session token lifetime in seconds
    pub fn expiry_seconds(&self) -> i64 {
        self.config.token_expiry_seconds
    }

    /// Issues a session token bound to an account id
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed JWT, expiring one TTL from now
    /// * `Err(DomainError)` - Token generation failed
    pub fn issue(&self, account_id: Uuid) -> Result<String, DomainError> {
        let claims = Claims::new_session_token(
            account_id,
            self.config.token_expiry_seconds,
            &self.config.issuer,
        );
        let header = Header::new(Algorithm::HS256);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies a session token and returns its claims
    ///
    /// Malformed, tampered, and expired tokens all come back as a
    /// `TokenError`; callers treat every variant as "unauthenticated",
    /// never as a server fault.
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        DomainError::Token(TokenError::TokenExpired)
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        DomainError::Token(TokenError::InvalidSignature)
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        DomainError::Token(TokenError::InvalidTokenFormat)
                    }
                    _ => DomainError::Token(TokenError::InvalidClaims),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Verifies a token and extracts the account id it is bound to
    pub fn verify_account_id(&self, token: &str) -> Result<Uuid, DomainError> {
        let claims = self.verify(token)?;
        claims
            .account_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidClaims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(TokenServiceConfig::new("test-secret"))
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = service();
        let account_id = Uuid::new_v4();

        let token = service.issue(account_id).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.account_id().unwrap(), account_id);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = TokenServiceConfig::new("test-secret").with_expiry_seconds(-120);
        let service = TokenService::new(config);

        let token = service.issue(Uuid::new_v4()).unwrap();
        let result = service.verify(&token);

        assert!(matches!(
            result,
            Err(DomainError::Token(TokenError::TokenExpired))
        ));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let service = service();
        let other = TokenService::new(TokenServiceConfig::new("different-secret"));

        let token = other.issue(Uuid::new_v4()).unwrap();
        let result = service.verify(&token);

        assert!(matches!(result, Err(DomainError::Token(_))));
    }

    #[test]
    fn test_malformed_token_rejected() {
        let service = service();
        assert!(matches!(
            service.verify("not.a.jwt"),
            Err(DomainError::Token(_))
        ));
        assert!(matches!(service.verify(""), Err(DomainError::Token(_))));
    }

    #[test]
    fn test_issuer_mismatch_rejected() {
        let service = service();
        let other =
            TokenService::new(TokenServiceConfig::new("test-secret").with_issuer("other-app"));

        let token = other.issue(Uuid::new_v4()).unwrap();
        let result = service.verify(&token);

        assert!(matches!(
            result,
            Err(DomainError::Token(TokenError::InvalidClaims))
        ));
        assert!(other.verify(&token).is_ok());
    }

    #[test]
    fn test_configured_issuer_stamped_into_claims() {
        let service =
            TokenService::new(TokenServiceConfig::new("test-secret").with_issuer("other-app"));

        let token = service.issue(Uuid::new_v4()).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.iss, "other-app");
    }

    #[test]
    fn test_verify_account_id() {
        let service = service();
        let account_id = Uuid::new_v4();
        let token = service.issue(account_id).unwrap();

        assert_eq!(service.verify_account_id(&token).unwrap(), account_id);
    }
}
