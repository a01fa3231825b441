//! Request and response DTOs for the HTTP layer.
//!
//! Field names follow the mobile client's JSON contract (camelCase where
//! the client sends camelCase).

pub mod auth;
pub mod feedback;
pub mod notification;
pub mod profile;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, ResetPasswordRequest};
pub use feedback::FeedbackRequest;
pub use notification::CreateNotificationRequest;
pub use profile::{EditProfileRequest, ProfileSummaryResponse};
