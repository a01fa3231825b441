use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of POST /api/EditProfileScreen
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EditProfileRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 255))]
    pub email: String,

    pub phone: Option<String>,

    /// Date of birth as the client sends it, stored verbatim
    pub dob: Option<String>,

    pub address: Option<String>,
}

/// Body of GET /api/ProfileScreen - the latest profile's display fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSummaryResponse {
    pub name: String,
    pub email: String,
}
