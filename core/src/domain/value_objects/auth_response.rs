//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Account;

/// Non-sensitive account fields echoed back after login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountSummary {
    #[serde(rename = "firstName")]
    pub first_name: String,

    #[serde(rename = "lastName")]
    pub last_name: String,

    pub email: String,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            email: account.email.clone(),
        }
    }
}

/// Authentication response containing the session token and account metadata
///
/// Returned after successful login. Carries no credential material beyond
/// the signed token itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Signed JWT session token
    pub token: String,

    /// Token expiration time in seconds
    pub expires_in: i64,

    /// Non-sensitive profile fields for the logged-in account
    pub user: AccountSummary,
}

impl AuthResponse {
    /// Creates a new authentication response from a token and account
    pub fn new(token: String, expires_in: i64, account: &Account) -> Self {
        Self {
            token,
            expires_in,
            user: AccountSummary::from(account),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_carries_no_hash() {
        let account = Account::new(
            "Ana".to_string(),
            "Lee".to_string(),
            "ana@x.com".to_string(),
            "$2b$10$hash".to_string(),
        );
        let response = AuthResponse::new("jwt".to_string(), 3600, &account);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["user"]["firstName"], "Ana");
        assert_eq!(json["user"]["email"], "ana@x.com");
        assert!(json["user"].get("password_hash").is_none());
    }
}
