//! Account entity representing a registered user of the VishConnect app.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account entity representing a registered user
///
/// The email is unique across all accounts; the store enforces this.
/// The password is held only as a bcrypt hash, never as plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// First name as entered at sign-up
    pub first_name: String,

    /// Last name as entered at sign-up
    pub last_name: String,

    /// Email address, unique and case-sensitive as stored
    pub email: String,

    /// Optional phone number, kept as a legacy second login key
    pub phone: Option<String>,

    /// Bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new Account instance
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        password_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            email,
            phone: None,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the stored password hash
    pub fn set_password_hash(&mut self, hash: String) {
        self.password_hash = hash;
        self.updated_at = Utc::now();
    }

    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_account() -> Account {
        Account::new(
            "Ana".to_string(),
            "Lee".to_string(),
            "ana@x.com".to_string(),
            "$2b$10$hash".to_string(),
        )
    }

    #[test]
    fn test_new_account_creation() {
        let account = sample_account();

        assert_eq!(account.first_name, "Ana");
        assert_eq!(account.last_name, "Lee");
        assert_eq!(account.email, "ana@x.com");
        assert_eq!(account.phone, None);
        assert_eq!(account.password_hash, "$2b$10$hash");
        assert_eq!(account.created_at, account.updated_at);
    }

    #[test]
    fn test_set_password_hash() {
        let mut account = sample_account();
        account.set_password_hash("$2b$10$other".to_string());

        assert_eq!(account.password_hash, "$2b$10$other");
        assert!(account.updated_at >= account.created_at);
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample_account().full_name(), "Ana Lee");
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let json = serde_json::to_value(sample_account()).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "ana@x.com");
    }
}
