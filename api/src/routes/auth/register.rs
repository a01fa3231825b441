use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::RegisterRequest;
use crate::handlers::{to_response, validation_failed};
use crate::routes::AppState;

use vc_core::repositories::{
    AccountRepository, FeedbackRepository, NotificationRepository, ProfileRepository,
};
use vc_shared::types::response::MessageResponse;

/// Handler for POST /SignUpScreen
///
/// Creates a new account from the sign-up form. Missing fields and a
/// duplicate email both come back as 400; success is 201 with a plain
/// message and no credential material.
pub async fn register<A, P, F, N>(
    state: web::Data<AppState<A, P, F, N>>,
    request: web::Json<RegisterRequest>,
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
        .register(
            &request.first_name,
            &request.last_name,
            &request.email,
            &request.password,
        )
        .await
    {
        Ok(account) => {
            log::info!("Account registered: {}", account.id);
            HttpResponse::Created().json(MessageResponse::new("User registered successfully"))
        }
        Err(error) => {
            log::warn!("Registration rejected: {}", error);
            to_response(&error)
        }
    }
}
