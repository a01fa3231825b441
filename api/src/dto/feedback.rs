use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of POST /Feedback
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FeedbackRequest {
    #[serde(rename = "fullName", default)]
    #[validate(length(min = 1, max = 200))]
    pub full_name: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 255))]
    pub email: String,

    pub phone: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1))]
    pub message: String,

    /// Categories ticked on the form
    #[serde(rename = "feedbackTypes", default)]
    pub feedback_types: Vec<String>,

    /// Star rating, 1 to 5
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
}
