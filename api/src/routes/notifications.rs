//! Notification inbox endpoints.

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::CreateNotificationRequest;
use crate::handlers::{to_response, validation_failed};
use crate::routes::AppState;

use vc_core::domain::entities::Notification;
use vc_core::repositories::{
    AccountRepository, FeedbackRepository, NotificationRepository, ProfileRepository,
};
use vc_shared::types::response::MessageResponse;

/// Handler for POST /Notifications
///
/// Creates an unread notification and echoes the stored document.
pub async fn create_notification<A, P, F, N>(
    state: web::Data<AppState<A, P, F, N>>,
    request: web::Json<CreateNotificationRequest>,
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
    let notification = Notification::new(request.title, request.message);

    match state.notification_repository.create(notification).await {
        Ok(saved) => HttpResponse::Created().json(saved),
        Err(error) => {
            log::error!("Failed to save notification: {}", error);
            to_response(&error)
        }
    }
}

/// Handler for GET /Notifications
pub async fn list_notifications<A, P, F, N>(state: web::Data<AppState<A, P, F, N>>) -> HttpResponse
where
    A: AccountRepository + 'static,
    P: ProfileRepository + 'static,
    F: FeedbackRepository + 'static,
    N: NotificationRepository + 'static,
{
    match state.notification_repository.find_all().await {
        Ok(notifications) => HttpResponse::Ok().json(notifications),
        Err(error) => {
            log::error!("Failed to list notifications: {}", error);
            to_response(&error)
        }
    }
}

/// Handler for POST /Notifications/mark-read
pub async fn mark_all_read<A, P, F, N>(state: web::Data<AppState<A, P, F, N>>) -> HttpResponse
where
    A: AccountRepository + 'static,
    P: ProfileRepository + 'static,
    F: FeedbackRepository + 'static,
    N: NotificationRepository + 'static,
{
    match state.notification_repository.mark_all_read().await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("All notifications marked as read")),
        Err(error) => {
            log::error!("Failed to mark notifications read: {}", error);
            to_response(&error)
        }
    }
}
