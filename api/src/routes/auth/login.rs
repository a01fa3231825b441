use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::{LoginRequest, LoginResponse};
use crate::handlers::{to_response, validation_failed};
use crate::routes::AppState;

use vc_core::repositories::{
    AccountRepository, FeedbackRepository, NotificationRepository, ProfileRepository,
};

/// Handler for POST /LoginUpScreen
///
/// Authenticates by email or legacy phone and answers with a session
/// token plus the non-sensitive profile fields. An unknown identifier is
/// 404; a bad password is 400.
pub async fn login<A, P, F, N>(
    state: web::Data<AppState<A, P, F, N>>,
    request: web::Json<LoginRequest>,
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
        .login(&request.email_or_phone, &request.password)
        .await
    {
        Ok(auth) => HttpResponse::Ok().json(LoginResponse {
            message: "Login successful".to_string(),
            token: auth.token,
            expires_in: auth.expires_in,
            user: auth.user,
        }),
        Err(error) => {
            log::warn!("Login rejected: {}", error);
            to_response(&error)
        }
    }
}
