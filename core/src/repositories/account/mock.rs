//! Mock implementation of AccountRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Account;
use crate::errors::{AuthError, DomainError};

use super::trait_::AccountRepository;

/// Mock account repository for testing
///
/// The duplicate-email check and the insert happen under one write lock,
/// matching the atomicity the MySQL unique index provides in production.
#[derive(Clone)]
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
}

impl MockAccountRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a mock repository pre-seeded with an account
    pub async fn with_existing_account(account: Account) -> Self {
        let repo = Self::new();
        repo.accounts.write().await.insert(account.id, account);
        repo
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_email_or_phone(
        &self,
        identifier: &str,
    ) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| a.email == identifier || a.phone.as_deref() == Some(identifier))
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts.values().any(|a| a.email == account.email) {
            return Err(DomainError::Auth(AuthError::EmailAlreadyRegistered));
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn update_password_hash(
        &self,
        account_id: Uuid,
        new_hash: &str,
    ) -> Result<(), DomainError> {
        let mut accounts = self.accounts.write().await;

        match accounts.get_mut(&account_id) {
            Some(account) => {
                account.set_password_hash(new_hash.to_string());
                Ok(())
            }
            None => Err(DomainError::Auth(AuthError::AccountNotFound)),
        }
    }
}
