//! Main account service implementation

use std::sync::Arc;

use vc_shared::utils::validation::{is_valid_email, not_empty};

use crate::domain::entities::Account;
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::AccountRepository;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

/// Account service orchestrating registration, login, and password reset
///
/// Holds its collaborators by reference, injected at construction; nothing
/// here reaches for ambient or global state. Bcrypt work runs on the
/// blocking thread pool so one slow hash never stalls unrelated requests.
pub struct AuthService<A>
where
    A: AccountRepository,
{
    /// Account repository for credential persistence
    account_repository: Arc<A>,
    /// Token service for session token issuance
    token_service: Arc<TokenService>,
    /// Password hashing primitive
    password_hasher: PasswordHasher,
}

impl<A> AuthService<A>
where
    A: AccountRepository + 'static,
{
    /// Create a new account service
    ///
    /// # Arguments
    ///
    /// * `account_repository` - Repository for account persistence
    /// * `token_service` - Service for JWT session tokens
    /// * `password_hasher` - Bcrypt hashing primitive
    pub fn new(
        account_repository: Arc<A>,
        token_service: Arc<TokenService>,
        password_hasher: PasswordHasher,
    ) -> Self {
        Self {
            account_repository,
            token_service,
            password_hasher,
        }
    }

    /// Register a new account
    ///
    /// This method:
    /// 1. Rejects missing or empty fields
    /// 2. Rejects a malformed email address
    /// 3. Checks the email is not already registered
    /// 4. Hashes the password with a fresh salt
    /// 5. Inserts the account; a concurrent registration of the same email
    ///    still surfaces as a duplicate, because the store's uniqueness
    ///    constraint decides the race
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - The created account; callers must not echo
    ///   credential material from it
    /// * `Err(DomainError)` - Validation failure, duplicate email, or
    ///   infrastructure fault
    pub async fn register(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<Account> {
        // Step 1: Every field is required
        for (field, value) in [
            ("firstName", first_name),
            ("lastName", last_name),
            ("email", email),
            ("password", password),
        ] {
            if !not_empty(value) {
                return Err(DomainError::ValidationErr(ValidationError::required(field)));
            }
        }

        // Step 2: Email must at least look like an email
        if !is_valid_email(email) {
            return Err(DomainError::ValidationErr(ValidationError::InvalidEmail));
        }

        // Step 3: Duplicate check before doing any expensive hashing
        if self
            .account_repository
            .find_by_email(email)
            .await?
            .is_some()
        {
            return Err(DomainError::Auth(AuthError::EmailAlreadyRegistered));
        }

        // Step 4: Hash the password off the async runtime
        let password_hash = self.hash_blocking(password.to_string()).await?;

        // Step 5: Insert; the unique index arbitrates concurrent registrations
        let account = Account::new(
            first_name.trim().to_string(),
            last_name.trim().to_string(),
            email.to_string(),
            password_hash,
        );

        self.account_repository.create(account).await
    }

    /// Authenticate an account and issue a session token
    ///
    /// This method:
    /// 1. Rejects missing or empty fields
    /// 2. Looks the account up by email or legacy phone
    /// 3. Verifies the password against the stored hash; an absent or
    ///    corrupted hash fails closed as bad credentials
    /// 4. Issues a session token bound to the account id
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Token plus non-sensitive profile fields
    /// * `Err(DomainError)` - Unknown identifier, bad credentials, or
    ///   infrastructure fault
    pub async fn login(&self, identifier: &str, password: &str) -> DomainResult<AuthResponse> {
        // Step 1: Both fields are required
        if !not_empty(identifier) {
            return Err(DomainError::ValidationErr(ValidationError::required(
                "emailOrPhone",
            )));
        }
        if !not_empty(password) {
            return Err(DomainError::ValidationErr(ValidationError::required(
                "password",
            )));
        }

        // Step 2: Look up the account
        let account = self
            .account_repository
            .find_by_email_or_phone(identifier)
            .await?
            .ok_or(DomainError::Auth(AuthError::AccountNotFound))?;

        // Step 3: Verify the password, failing closed on any bad hash
        let verified = self
            .verify_blocking(password.to_string(), account.password_hash.clone())
            .await?;
        if !verified {
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        // Step 4: Mint the session token
        let token = self.token_service.issue(account.id)?;

        Ok(AuthResponse::new(
            token,
            self.token_service.expiry_seconds(),
            &account,
        ))
    }

    /// Reset an account's password by email
    ///
    /// This method:
    /// 1. Rejects missing or empty fields
    /// 2. Looks the account up by email
    /// 3. Hashes the new password with a fresh salt and stores it
    ///
    /// No identity proof beyond the email is demanded; this mirrors the
    /// mobile app's forgot-password screen.
    pub async fn reset_password(&self, email: &str, new_password: &str) -> DomainResult<()> {
        // Step 1: Both fields are required
        if !not_empty(email) {
            return Err(DomainError::ValidationErr(ValidationError::required(
                "email",
            )));
        }
        if !not_empty(new_password) {
            return Err(DomainError::ValidationErr(ValidationError::required(
                "newPassword",
            )));
        }

        // Step 2: Look up the account
        let account = self
            .account_repository
            .find_by_email(email)
            .await?
            .ok_or(DomainError::Auth(AuthError::AccountNotFound))?;

        // Step 3: Hash and store the replacement
        let new_hash = self.hash_blocking(new_password.to_string()).await?;

        self.account_repository
            .update_password_hash(account.id, &new_hash)
            .await
    }

    /// Run a bcrypt hash on the blocking thread pool
    async fn hash_blocking(&self, plaintext: String) -> DomainResult<String> {
        let hasher = self.password_hasher.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Password hashing task failed: {}", e),
            })?
    }

    /// Run a bcrypt verification on the blocking thread pool
    async fn verify_blocking(&self, plaintext: String, hash: String) -> DomainResult<bool> {
        let hasher = self.password_hasher.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &hash))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Password verification task failed: {}", e),
            })
    }
}
