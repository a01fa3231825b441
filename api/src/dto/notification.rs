use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of POST /Notifications
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateNotificationRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1))]
    pub message: String,
}
