//! Profile entity backing the edit-profile and profile screens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profile document created from the edit-profile screen
///
/// Profiles are append-only: every submission from the app inserts a new
/// document, and the profile screen reads back the most recent one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier for the profile document
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Contact phone number
    pub phone: Option<String>,

    /// Date of birth, free-form as entered in the app
    pub dob: Option<String>,

    /// Postal address
    pub address: Option<String>,

    /// Timestamp when the profile was created
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Creates a new Profile instance
    pub fn new(
        name: String,
        email: String,
        phone: Option<String>,
        dob: Option<String>,
        address: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            dob,
            address,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile() {
        let profile = Profile::new(
            "Ana Lee".to_string(),
            "ana@x.com".to_string(),
            Some("9876543210".to_string()),
            None,
            Some("Begumpet".to_string()),
        );

        assert_eq!(profile.name, "Ana Lee");
        assert_eq!(profile.email, "ana@x.com");
        assert!(profile.dob.is_none());
    }
}
