//! Notification entity for the in-app inbox.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Notification shown in the app's inbox
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier for the notification
    pub id: Uuid,

    /// Short headline
    pub title: String,

    /// Notification body
    pub message: String,

    /// Whether the notification has been read
    pub read: bool,

    /// Timestamp when the notification was created
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Creates a new unread Notification
    pub fn new(title: String, message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            message,
            read: false,
            created_at: Utc::now(),
        }
    }

    /// Marks the notification as read
    pub fn mark_read(&mut self) {
        self.read = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notification_is_unread() {
        let notification = Notification::new("Update".to_string(), "New features".to_string());
        assert!(!notification.read);
    }

    #[test]
    fn test_mark_read() {
        let mut notification = Notification::new("Update".to_string(), "Body".to_string());
        notification.mark_read();
        assert!(notification.read);
    }
}
