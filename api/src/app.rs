//! Application factory
//!
//! Builds the actix-web `App` with middleware, shared state, and every
//! route the mobile client calls. Generic over the repository
//! implementations so tests can run the full HTTP surface against the
//! in-memory mocks.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::auth::{login, register, reset_password};
use crate::routes::contact::contact_info;
use crate::routes::feedback::submit_feedback;
use crate::routes::notifications::{create_notification, list_notifications, mark_all_read};
use crate::routes::profile::{edit_profile, get_profile};
use crate::routes::AppState;

use vc_core::repositories::{
    AccountRepository, FeedbackRepository, NotificationRepository, ProfileRepository,
};
use vc_shared::types::response::ErrorResponse;

/// Create and configure the application with all routes wired
pub fn create_app<A, P, F, N>(
    state: web::Data<AppState<A, P, F, N>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    A: AccountRepository + 'static,
    P: ProfileRepository + 'static,
    F: FeedbackRepository + 'static,
    N: NotificationRepository + 'static,
{
    let cors = create_cors();

    // The JWT middleware reads the token service out of app data
    let token_service = web::Data::new(state.token_service.clone());

    App::new()
        .app_data(state)
        .app_data(token_service)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Credential lifecycle
        .route("/SignUpScreen", web::post().to(register::<A, P, F, N>))
        .route("/LoginUpScreen", web::post().to(login::<A, P, F, N>))
        .route("/ForgotScreen", web::post().to(reset_password::<A, P, F, N>))
        // Feedback form
        .route("/Feedback", web::post().to(submit_feedback::<A, P, F, N>))
        // Notification inbox
        .service(
            web::resource("/Notifications")
                .route(web::get().to(list_notifications::<A, P, F, N>))
                .route(web::post().to(create_notification::<A, P, F, N>)),
        )
        .route(
            "/Notifications/mark-read",
            web::post().to(mark_all_read::<A, P, F, N>),
        )
        // Company contact document
        .route("/contact-info", web::get().to(contact_info))
        // Profile screens require a valid session token
        .service(
            web::scope("/api")
                .wrap(JwtAuth::new())
                .route(
                    "/EditProfileScreen",
                    web::post().to(edit_profile::<A, P, F, N>),
                )
                .route("/ProfileScreen", web::get().to(get_profile::<A, P, F, N>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "vishconnect-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}
