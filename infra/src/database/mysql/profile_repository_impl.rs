//! MySQL implementation of the ProfileRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use vc_core::domain::entities::Profile;
use vc_core::errors::DomainError;
use vc_core::repositories::ProfileRepository;

/// MySQL implementation of ProfileRepository
pub struct MySqlProfileRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlProfileRepository {
    /// Create a new MySQL profile repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Profile entity
    fn row_to_profile(row: &sqlx::mysql::MySqlRow) -> Result<Profile, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;

        Ok(Profile {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid profile UUID: {}", e),
            })?,
            name: row.try_get("name").map_err(|e| DomainError::Internal {
                message: format!("Failed to get name: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Internal {
                message: format!("Failed to get email: {}", e),
            })?,
            phone: row.try_get("phone").map_err(|e| DomainError::Internal {
                message: format!("Failed to get phone: {}", e),
            })?,
            dob: row.try_get("dob").map_err(|e| DomainError::Internal {
                message: format!("Failed to get dob: {}", e),
            })?,
            address: row.try_get("address").map_err(|e| DomainError::Internal {
                message: format!("Failed to get address: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl ProfileRepository for MySqlProfileRepository {
    async fn create(&self, profile: Profile) -> Result<Profile, DomainError> {
        let query = r#"
            INSERT INTO profiles (
                id, name, email, phone, dob, address, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(profile.id.to_string())
            .bind(&profile.name)
            .bind(&profile.email)
            .bind(&profile.phone)
            .bind(&profile.dob)
            .bind(&profile.address)
            .bind(profile.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to save profile: {}", e),
            })?;

        Ok(profile)
    }

    async fn find_latest(&self) -> Result<Option<Profile>, DomainError> {
        let query = r#"
            SELECT id, name, email, phone, dob, address, created_at
            FROM profiles
            ORDER BY created_at DESC, id DESC
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to fetch latest profile: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_profile(&row)?)),
            None => Ok(None),
        }
    }
}
