use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::ResetPasswordRequest;
use crate::handlers::{to_response, validation_failed};
use crate::routes::AppState;

use vc_core::errors::{AuthError, DomainError};
use vc_core::repositories::{
    AccountRepository, FeedbackRepository, NotificationRepository, ProfileRepository,
};
use vc_shared::types::response::{ErrorResponse, MessageResponse};

/// Handler for POST /ForgotScreen
///
/// Replaces the stored password hash for the given email. The mobile
/// client's forgot-password screen expects 400 for an unknown email here,
/// unlike login where the same condition is 404.
pub async fn reset_password<A, P, F, N>(
    state: web::Data<AppState<A, P, F, N>>,
    request: web::Json<ResetPasswordRequest>,
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

    match state
        .auth_service
        .reset_password(&request.email, &request.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Password updated successfully")),
        Err(DomainError::Auth(AuthError::AccountNotFound)) => HttpResponse::BadRequest().json(
            ErrorResponse::new(AuthError::AccountNotFound.error_code(), "User not found"),
        ),
        Err(error) => {
            log::warn!("Password reset rejected: {}", error);
            to_response(&error)
        }
    }
}
