//! Profile endpoints behind the JWT middleware.

use actix_web::{web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::dto::{EditProfileRequest, ProfileSummaryResponse};
use crate::handlers::{to_response, validation_failed};
use crate::routes::AppState;

use vc_core::domain::entities::Profile;
use vc_core::repositories::{
    AccountRepository, FeedbackRepository, NotificationRepository, ProfileRepository,
};

/// Handler for POST /api/EditProfileScreen
///
/// Inserts a new profile document and echoes it back. Each save is a new
/// document; the read side only ever looks at the latest one.
pub async fn edit_profile<A, P, F, N>(
    state: web::Data<AppState<A, P, F, N>>,
    request: web::Json<EditProfileRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    P: ProfileRepository + 'static,
    F: FeedbackRepository + 'static,
    N: NotificationRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_failed(&errors);
    }

    let request = request.into_inner();
    let profile = Profile::new(
        request.name,
        request.email,
        request.phone,
        request.dob,
        request.address,
    );

    match state.profile_repository.create(profile).await {
        Ok(saved) => HttpResponse::Ok().json(json!({
            "message": "Profile created successfully",
            "user": saved,
        })),
        Err(error) => {
            log::error!("Failed to save profile: {}", error);
            to_response(&error)
        }
    }
}

/// Handler for GET /api/ProfileScreen
///
/// Returns the display fields of the most recently saved profile, 404
/// when none has been saved yet.
pub async fn get_profile<A, P, F, N>(state: web::Data<AppState<A, P, F, N>>) -> HttpResponse
where
    A: AccountRepository + 'static,
    P: ProfileRepository + 'static,
    F: FeedbackRepository + 'static,
    N: NotificationRepository + 'static,
{
    match state.profile_repository.find_latest().await {
        Ok(Some(profile)) => HttpResponse::Ok().json(ProfileSummaryResponse {
            name: profile.name,
            email: profile.email,
        }),
        Ok(None) => to_response(&vc_core::errors::DomainError::NotFound {
            resource: "Profile".to_string(),
        }),
        Err(error) => {
            log::error!("Failed to fetch profile: {}", error);
            to_response(&error)
        }
    }
}
