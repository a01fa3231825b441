//! Password hashing service built on bcrypt.

use crate::errors::{DomainError, ValidationError};

/// One-way salted password hashing and verification
///
/// Bcrypt embeds the salt and cost factor in the hash string itself, so
/// every hash is self-describing and two hashes of the same plaintext
/// differ.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher {
    /// Create a hasher with the default bcrypt cost
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hasher with an explicit cost factor
    ///
    /// Lower costs are useful in tests where wall-clock time matters.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password with a fresh random salt
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The bcrypt hash string
    /// * `Err(DomainError)` - Empty plaintext or bcrypt failure
    pub fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
        if plaintext.is_empty() {
            return Err(DomainError::ValidationErr(ValidationError::required(
                "password",
            )));
        }

        bcrypt::hash(plaintext, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Failed to hash password: {}", e),
        })
    }

    /// Verify a plaintext password against a stored hash
    ///
    /// Fails closed: a structurally invalid or empty stored hash returns
    /// `false`, never an error, so a corrupted credential row reads as a
    /// failed login rather than a server fault.
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        bcrypt::verify(plaintext, hash).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum cost keeps these tests fast; production uses DEFAULT_COST.
    fn hasher() -> PasswordHasher {
        PasswordHasher::with_cost(4)
    }

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hasher = hasher();
        let hash = hasher.hash("pw123").unwrap();
        assert!(hasher.verify("pw123", &hash));
        assert!(!hasher.verify("wrong", &hash));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let hasher = hasher();
        let first = hasher.hash("pw123").unwrap();
        let second = hasher.hash("pw123").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_empty_plaintext_rejected() {
        let result = hasher().hash("");
        assert!(matches!(
            result,
            Err(DomainError::ValidationErr(
                ValidationError::RequiredField { .. }
            ))
        ));
    }

    #[test]
    fn test_verify_fails_closed_on_garbage_hash() {
        let hasher = hasher();
        assert!(!hasher.verify("pw123", "not-a-bcrypt-hash"));
        assert!(!hasher.verify("pw123", ""));
    }
}
