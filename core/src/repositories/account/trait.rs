//! Account repository trait defining the interface for credential persistence.
//!
//! This module defines the repository pattern interface for Account
//! entities. The trait is async-first and uses Result types for proper
//! error handling.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Account;
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations
///
/// Implementations handle the actual database operations while keeping
/// the abstraction boundary between domain and infrastructure layers.
/// The backing store owns the email-uniqueness invariant: `create` must
/// behave atomically with respect to concurrent inserts of the same email,
/// so exactly one of two racing registrations succeeds.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by email, falling back to the legacy phone column
    ///
    /// # Arguments
    /// * `identifier` - Email address or phone number, matched exactly
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account matches the identifier
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_email_or_phone(
        &self,
        identifier: &str,
    ) -> Result<Option<Account>, DomainError>;

    /// Find an account by exact email match
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with this email
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Create a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The created account
    /// * `Err(DomainError::Auth(EmailAlreadyRegistered))` - Email already taken,
    ///   including when a concurrent insert won the race
    /// * `Err(DomainError)` - Other database error
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Replace the stored password hash for an account
    ///
    /// # Returns
    /// * `Ok(())` - Hash updated
    /// * `Err(DomainError::Auth(AccountNotFound))` - No account with this id
    /// * `Err(DomainError)` - Other database error
    async fn update_password_hash(
        &self,
        account_id: Uuid,
        new_hash: &str,
    ) -> Result<(), DomainError>;
}
