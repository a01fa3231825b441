//! Notification repository interface and in-memory mock.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::Notification;
use crate::errors::DomainError;

/// Repository trait for the notification inbox
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Persist a new notification
    async fn create(&self, notification: Notification) -> Result<Notification, DomainError>;

    /// List every notification, oldest first
    async fn find_all(&self) -> Result<Vec<Notification>, DomainError>;

    /// Mark every notification as read
    async fn mark_all_read(&self) -> Result<(), DomainError>;
}

/// Mock notification repository for testing
#[derive(Clone, Default)]
pub struct MockNotificationRepository {
    notifications: Arc<RwLock<Vec<Notification>>>,
}

impl MockNotificationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationRepository for MockNotificationRepository {
    async fn create(&self, notification: Notification) -> Result<Notification, DomainError> {
        self.notifications.write().await.push(notification.clone());
        Ok(notification)
    }

    async fn find_all(&self) -> Result<Vec<Notification>, DomainError> {
        Ok(self.notifications.read().await.clone())
    }

    async fn mark_all_read(&self) -> Result<(), DomainError> {
        let mut notifications = self.notifications.write().await;
        for notification in notifications.iter_mut() {
            notification.mark_read();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mark_all_read() {
        let repo = MockNotificationRepository::new();
        repo.create(Notification::new("a".to_string(), "one".to_string()))
            .await
            .unwrap();
        repo.create(Notification::new("b".to_string(), "two".to_string()))
            .await
            .unwrap();

        repo.mark_all_read().await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|n| n.read));
    }
}
