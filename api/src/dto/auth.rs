use serde::{Deserialize, Serialize};
use validator::Validate;

use vc_core::domain::value_objects::AccountSummary;

/// Body of POST /SignUpScreen
///
/// Absent fields deserialize as empty strings so the account service can
/// report them as missing rather than the JSON extractor rejecting the
/// whole body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(rename = "firstName", default)]
    #[validate(length(max = 100))]
    pub first_name: String,

    #[serde(rename = "lastName", default)]
    #[validate(length(max = 100))]
    pub last_name: String,

    #[serde(default)]
    #[validate(length(max = 255))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 128))]
    pub password: String,
}

/// Body of POST /LoginUpScreen
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address, or the legacy phone match key
    #[serde(rename = "emailOrPhone", default)]
    #[validate(length(max = 255))]
    pub email_or_phone: String,

    #[serde(default)]
    #[validate(length(max = 128))]
    pub password: String,
}

/// Body of POST /ForgotScreen
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[serde(default)]
    #[validate(length(max = 255))]
    pub email: String,

    #[serde(rename = "newPassword", default)]
    #[validate(length(max = 128))]
    pub new_password: String,
}

/// Body returned by a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,

    /// Signed session token
    pub token: String,

    /// Token lifetime in seconds
    #[serde(rename = "expiresIn")]
    pub expires_in: i64,

    /// Non-sensitive profile fields
    pub user: AccountSummary,
}
