//! MySQL implementation of the AccountRepository trait.
//!
//! This module provides the concrete implementation of credential
//! persistence using MySQL with SQLx. The `UNIQUE KEY` on the email
//! column arbitrates concurrent registrations: the insert itself is the
//! atomic check-then-insert the registration flow relies on.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use vc_core::domain::entities::Account;
use vc_core::errors::{AuthError, DomainError};
use vc_core::repositories::AccountRepository;

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Account entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;

        Ok(Account {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid account UUID: {}", e),
            })?,
            first_name: row.try_get("first_name").map_err(|e| DomainError::Internal {
                message: format!("Failed to get first_name: {}", e),
            })?,
            last_name: row.try_get("last_name").map_err(|e| DomainError::Internal {
                message: format!("Failed to get last_name: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Internal {
                message: format!("Failed to get email: {}", e),
            })?,
            phone: row.try_get("phone").map_err(|e| DomainError::Internal {
                message: format!("Failed to get phone: {}", e),
            })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get password_hash: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_email_or_phone(
        &self,
        identifier: &str,
    ) -> Result<Option<Account>, DomainError> {
        let query = r#"
            SELECT id, first_name, last_name, email, phone,
                   password_hash, created_at, updated_at
            FROM accounts
            WHERE email = ? OR phone = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(identifier)
            .bind(identifier)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find account: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let query = r#"
            SELECT id, first_name, last_name, email, phone,
                   password_hash, created_at, updated_at
            FROM accounts
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find account by email: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts (
                id, first_name, last_name, email, phone,
                password_hash, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(account.id.to_string())
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(&account.email)
            .bind(&account.phone)
            .bind(&account.password_hash)
            .bind(account.created_at)
            .bind(account.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                // Unique-index violation on email means a concurrent or
                // earlier registration owns this address
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    DomainError::Auth(AuthError::EmailAlreadyRegistered)
                }
                _ => DomainError::Internal {
                    message: format!("Failed to create account: {}", e),
                },
            })?;

        Ok(account)
    }

    async fn update_password_hash(
        &self,
        account_id: Uuid,
        new_hash: &str,
    ) -> Result<(), DomainError> {
        let query = r#"
            UPDATE accounts
            SET password_hash = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(new_hash)
            .bind(Utc::now())
            .bind(account_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to update password hash: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::Auth(AuthError::AccountNotFound));
        }

        Ok(())
    }
}
