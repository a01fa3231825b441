//! Feedback form endpoint.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::FeedbackRequest;
use crate::handlers::{to_response, validation_failed};
use crate::routes::AppState;

use vc_core::domain::entities::Feedback;
use vc_core::repositories::{
    AccountRepository, FeedbackRepository, NotificationRepository, ProfileRepository,
};
use vc_shared::types::response::MessageResponse;

/// Handler for POST /Feedback
pub async fn submit_feedback<A, P, F, N>(
    state: web::Data<AppState<A, P, F, N>>,
    request: web::Json<FeedbackRequest>,
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
    let feedback = Feedback::new(
        request.full_name,
        request.email,
        request.phone,
        request.message,
        request.feedback_types,
        request.rating,
    );

    match state.feedback_repository.create(feedback).await {
        Ok(_) => {
            HttpResponse::Created().json(MessageResponse::new("Feedback submitted successfully!"))
        }
        Err(error) => {
            log::error!("Failed to save feedback: {}", error);
            to_response(&error)
        }
    }
}
