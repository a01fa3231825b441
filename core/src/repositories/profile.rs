//! Profile repository interface and in-memory mock.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::Profile;
use crate::errors::DomainError;

/// Repository trait for profile documents
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Insert a new profile document
    async fn create(&self, profile: Profile) -> Result<Profile, DomainError>;

    /// Fetch the most recently created profile, if any
    async fn find_latest(&self) -> Result<Option<Profile>, DomainError>;
}

/// Mock profile repository for testing
#[derive(Clone, Default)]
pub struct MockProfileRepository {
    profiles: Arc<RwLock<Vec<Profile>>>,
}

impl MockProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn create(&self, profile: Profile) -> Result<Profile, DomainError> {
        self.profiles.write().await.push(profile.clone());
        Ok(profile)
    }

    async fn find_latest(&self) -> Result<Option<Profile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.last().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_latest_returns_most_recent() {
        let repo = MockProfileRepository::new();
        assert!(repo.find_latest().await.unwrap().is_none());

        repo.create(Profile::new(
            "First".to_string(),
            "first@x.com".to_string(),
            None,
            None,
            None,
        ))
        .await
        .unwrap();
        repo.create(Profile::new(
            "Second".to_string(),
            "second@x.com".to_string(),
            None,
            None,
            None,
        ))
        .await
        .unwrap();

        let latest = repo.find_latest().await.unwrap().unwrap();
        assert_eq!(latest.name, "Second");
    }
}
