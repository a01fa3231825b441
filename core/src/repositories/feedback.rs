//! Feedback repository interface and in-memory mock.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::Feedback;
use crate::errors::DomainError;

/// Repository trait for feedback submissions
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Persist a feedback submission
    async fn create(&self, feedback: Feedback) -> Result<Feedback, DomainError>;
}

/// Mock feedback repository for testing
#[derive(Clone, Default)]
pub struct MockFeedbackRepository {
    submissions: Arc<RwLock<Vec<Feedback>>>,
}

impl MockFeedbackRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored submissions
    pub async fn len(&self) -> usize {
        self.submissions.read().await.len()
    }
}

#[async_trait]
impl FeedbackRepository for MockFeedbackRepository {
    async fn create(&self, feedback: Feedback) -> Result<Feedback, DomainError> {
        self.submissions.write().await.push(feedback.clone());
        Ok(feedback)
    }
}
