//! MySQL implementation of the NotificationRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use vc_core::domain::entities::Notification;
use vc_core::errors::DomainError;
use vc_core::repositories::NotificationRepository;

/// MySQL implementation of NotificationRepository
pub struct MySqlNotificationRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlNotificationRepository {
    /// Create a new MySQL notification repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Notification entity
    fn row_to_notification(row: &sqlx::mysql::MySqlRow) -> Result<Notification, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;

        Ok(Notification {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid notification UUID: {}", e),
            })?,
            title: row.try_get("title").map_err(|e| DomainError::Internal {
                message: format!("Failed to get title: {}", e),
            })?,
            message: row.try_get("message").map_err(|e| DomainError::Internal {
                message: format!("Failed to get message: {}", e),
            })?,
            read: row.try_get("is_read").map_err(|e| DomainError::Internal {
                message: format!("Failed to get is_read: {}", e),
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
impl NotificationRepository for MySqlNotificationRepository {
    async fn create(&self, notification: Notification) -> Result<Notification, DomainError> {
        let query = r#"
            INSERT INTO notifications (
                id, title, message, is_read, created_at
            ) VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(notification.id.to_string())
            .bind(&notification.title)
            .bind(&notification.message)
            .bind(notification.read)
            .bind(notification.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to save notification: {}", e),
            })?;

        Ok(notification)
    }

    async fn find_all(&self) -> Result<Vec<Notification>, DomainError> {
        let query = r#"
            SELECT id, title, message, is_read, created_at
            FROM notifications
            ORDER BY created_at ASC, id ASC
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to list notifications: {}", e),
            })?;

        rows.iter().map(Self::row_to_notification).collect()
    }

    async fn mark_all_read(&self) -> Result<(), DomainError> {
        let query = r#"
            UPDATE notifications
            SET is_read = TRUE
            WHERE is_read = FALSE
        "#;

        sqlx::query(query)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to mark notifications read: {}", e),
            })?;

        Ok(())
    }
}
