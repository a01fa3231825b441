//! Route-level tests for the profile, feedback, notification, and contact
//! endpoints, plus the app-wide handlers.

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web};
use serde_json::{json, Value};
use uuid::Uuid;

use vc_api::app::create_app;
use vc_api::routes::AppState;
use vc_core::repositories::{
    MockAccountRepository, MockFeedbackRepository, MockNotificationRepository,
    MockProfileRepository,
};
use vc_core::services::auth::AuthService;
use vc_core::services::password::PasswordHasher;
use vc_core::services::token::{TokenService, TokenServiceConfig};

type TestState = AppState<
    MockAccountRepository,
    MockProfileRepository,
    MockFeedbackRepository,
    MockNotificationRepository,
>;

fn build_state() -> web::Data<TestState> {
    let account_repository = Arc::new(MockAccountRepository::new());
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::new("test-secret")));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&account_repository),
        Arc::clone(&token_service),
        PasswordHasher::with_cost(4),
    ));

    web::Data::new(AppState {
        auth_service,
        token_service,
        profile_repository: Arc::new(MockProfileRepository::new()),
        feedback_repository: Arc::new(MockFeedbackRepository::new()),
        notification_repository: Arc::new(MockNotificationRepository::new()),
    })
}

/// Issue a session token the app under test will accept
fn bearer(state: &web::Data<TestState>) -> String {
    let token = state.token_service.issue(Uuid::new_v4()).unwrap();
    format!("Bearer {}", token)
}

#[actix_web::test]
async fn test_edit_profile_then_fetch_latest() {
    let state = build_state();
    let auth = bearer(&state);
    let app = test::init_service(create_app(state)).await;

    let save = test::TestRequest::post()
        .uri("/api/EditProfileScreen")
        .insert_header(("Authorization", auth.clone()))
        .set_json(json!({
            "name": "Ana Lee",
            "email": "ana@example.com",
            "phone": "9876543210",
            "dob": "1994-02-11",
            "address": "12 Lake View Road"
        }))
        .to_request();
    let resp = test::call_service(&app, save).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Profile created successfully");
    assert_eq!(body["user"]["name"], "Ana Lee");

    let fetch = test::TestRequest::get()
        .uri("/api/ProfileScreen")
        .insert_header(("Authorization", auth))
        .to_request();
    let resp = test::call_service(&app, fetch).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Ana Lee");
    assert_eq!(body["email"], "ana@example.com");
}

#[actix_web::test]
async fn test_fetch_profile_when_none_saved_is_404() {
    let state = build_state();
    let auth = bearer(&state);
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get()
        .uri("/api/ProfileScreen")
        .insert_header(("Authorization", auth))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_profile_routes_require_token() {
    let app = test::init_service(create_app(build_state())).await;

    let no_header = test::TestRequest::get()
        .uri("/api/ProfileScreen")
        .to_request();
    let resp = test::try_call_service(&app, no_header).await;
    assert!(resp.is_err());

    let bad_token = test::TestRequest::get()
        .uri("/api/ProfileScreen")
        .insert_header(("Authorization", "Bearer not.a.jwt"))
        .to_request();
    let resp = test::try_call_service(&app, bad_token).await;
    assert!(resp.is_err());
}

#[actix_web::test]
async fn test_submit_feedback() {
    let app = test::init_service(create_app(build_state())).await;

    let req = test::TestRequest::post()
        .uri("/Feedback")
        .set_json(json!({
            "fullName": "Ana Lee",
            "email": "ana@example.com",
            "message": "Great app, the profile screen is very smooth",
            "feedbackTypes": ["ui", "performance"],
            "rating": 5
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Feedback submitted successfully!");
}

#[actix_web::test]
async fn test_submit_feedback_invalid_rating_rejected() {
    let app = test::init_service(create_app(build_state())).await;

    let req = test::TestRequest::post()
        .uri("/Feedback")
        .set_json(json!({
            "fullName": "Ana Lee",
            "email": "ana@example.com",
            "message": "rating out of range",
            "feedbackTypes": ["other"],
            "rating": 9
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_notification_inbox_flow() {
    let app = test::init_service(create_app(build_state())).await;

    let create = test::TestRequest::post()
        .uri("/Notifications")
        .set_json(json!({
            "title": "New Feature Update Available!",
            "message": "We've added exciting new features. Check them out!"
        }))
        .to_request();
    let resp = test::call_service(&app, create).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["read"], false);

    let list = test::TestRequest::get().uri("/Notifications").to_request();
    let resp = test::call_service(&app, list).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().map(|a| a.len()), Some(1));

    let mark = test::TestRequest::post()
        .uri("/Notifications/mark-read")
        .to_request();
    let resp = test::call_service(&app, mark).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let list = test::TestRequest::get().uri("/Notifications").to_request();
    let body: Value = test::call_and_read_body_json(&app, list).await;
    assert!(body
        .as_array()
        .unwrap()
        .iter()
        .all(|n| n["read"] == json!(true)));
}

#[actix_web::test]
async fn test_contact_info_document() {
    let app = test::init_service(create_app(build_state())).await;

    let req = test::TestRequest::get().uri("/contact-info").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "vishwasritechnologies@vishcom.net");
    assert_eq!(body["website"], "https://www.vishcom.net");
    assert_eq!(body["location"]["latitude"], 17.443909);
    assert_eq!(body["availability"], "Mon - Sat | 9 AM - 6 PM");
}

#[actix_web::test]
async fn test_health_check() {
    let app = test::init_service(create_app(build_state())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "vishconnect-api");
}

#[actix_web::test]
async fn test_unknown_route_is_404() {
    let app = test::init_service(create_app(build_state())).await;

    let req = test::TestRequest::get().uri("/NoSuchScreen").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
