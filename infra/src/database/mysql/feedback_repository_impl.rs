//! MySQL implementation of the FeedbackRepository trait.

use async_trait::async_trait;
use sqlx::MySqlPool;

use vc_core::domain::entities::Feedback;
use vc_core::errors::DomainError;
use vc_core::repositories::FeedbackRepository;

/// MySQL implementation of FeedbackRepository
pub struct MySqlFeedbackRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlFeedbackRepository {
    /// Create a new MySQL feedback repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackRepository for MySqlFeedbackRepository {
    async fn create(&self, feedback: Feedback) -> Result<Feedback, DomainError> {
        // The ticked categories are stored as a JSON array in a TEXT column
        let feedback_types =
            serde_json::to_string(&feedback.feedback_types).map_err(|e| DomainError::Internal {
                message: format!("Failed to serialize feedback types: {}", e),
            })?;

        let query = r#"
            INSERT INTO feedback (
                id, full_name, email, phone, message,
                feedback_types, rating, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(feedback.id.to_string())
            .bind(&feedback.full_name)
            .bind(&feedback.email)
            .bind(&feedback.phone)
            .bind(&feedback.message)
            .bind(&feedback_types)
            .bind(feedback.rating)
            .bind(feedback.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to save feedback: {}", e),
            })?;

        Ok(feedback)
    }
}
