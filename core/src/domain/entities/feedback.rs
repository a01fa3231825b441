//! Feedback entity for app feedback submissions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Feedback submitted from the app's feedback form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Unique identifier for the submission
    pub id: Uuid,

    /// Submitter's full name
    pub full_name: String,

    /// Submitter's email
    pub email: String,

    /// Optional contact phone
    pub phone: Option<String>,

    /// Free-form feedback message
    pub message: String,

    /// Categories ticked on the form
    pub feedback_types: Vec<String>,

    /// Star rating, 1 to 5
    pub rating: u8,

    /// Timestamp when the feedback was submitted
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    /// Creates a new Feedback instance
    pub fn new(
        full_name: String,
        email: String,
        phone: Option<String>,
        message: String,
        feedback_types: Vec<String>,
        rating: u8,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name,
            email,
            phone,
            message,
            feedback_types,
            rating,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_feedback() {
        let feedback = Feedback::new(
            "Ana Lee".to_string(),
            "ana@x.com".to_string(),
            None,
            "Great app".to_string(),
            vec!["ui".to_string(), "performance".to_string()],
            5,
        );

        assert_eq!(feedback.rating, 5);
        assert_eq!(feedback.feedback_types.len(), 2);
    }
}
