//! Account service behavior tests against the mock repository

use std::sync::Arc;

use crate::domain::entities::Account;
use crate::errors::{AuthError, DomainError, TokenError, ValidationError};
use crate::repositories::{AccountRepository, MockAccountRepository};
use crate::services::auth::AuthService;
use crate::services::password::PasswordHasher;
use crate::services::token::{TokenService, TokenServiceConfig};

fn build_service(repo: Arc<MockAccountRepository>) -> AuthService<MockAccountRepository> {
    build_service_with_expiry(repo, 3600)
}

fn build_service_with_expiry(
    repo: Arc<MockAccountRepository>,
    expiry_seconds: i64,
) -> AuthService<MockAccountRepository> {
    let token_service = Arc::new(TokenService::new(
        TokenServiceConfig::new("test-secret").with_expiry_seconds(expiry_seconds),
    ));
    // Minimum bcrypt cost keeps the suite fast
    AuthService::new(repo, token_service, PasswordHasher::with_cost(4))
}

#[tokio::test]
async fn test_register_then_login_round_trip() {
    let repo = Arc::new(MockAccountRepository::new());
    let service = build_service(repo);

    let account = service
        .register("Ana", "Lee", "ana@x.com", "pw123")
        .await
        .unwrap();
    assert_eq!(account.email, "ana@x.com");
    assert_ne!(account.password_hash, "pw123");

    let response = service.login("ana@x.com", "pw123").await.unwrap();
    assert!(!response.token.is_empty());
    assert_eq!(response.user.first_name, "Ana");
    assert_eq!(response.user.email, "ana@x.com");
    assert_eq!(response.expires_in, 3600);
}

#[tokio::test]
async fn test_register_missing_field_rejected() {
    let repo = Arc::new(MockAccountRepository::new());
    let service = build_service(repo.clone());

    let result = service.register("Ana", "", "ana@x.com", "pw123").await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(
            ValidationError::RequiredField { .. }
        ))
    ));
    assert_eq!(repo.len().await, 0);
}

#[tokio::test]
async fn test_register_malformed_email_rejected() {
    let repo = Arc::new(MockAccountRepository::new());
    let service = build_service(repo);

    let result = service.register("Ana", "Lee", "not-an-email", "pw123").await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::InvalidEmail))
    ));
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let repo = Arc::new(MockAccountRepository::new());
    let service = build_service(repo);

    service
        .register("Ana", "Lee", "ana@x.com", "pw123")
        .await
        .unwrap();
    let second = service.register("Bea", "Roy", "ana@x.com", "other").await;

    assert!(matches!(
        second,
        Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))
    ));
}

#[tokio::test]
async fn test_concurrent_identical_registrations_create_one_account() {
    let repo = Arc::new(MockAccountRepository::new());
    let service = Arc::new(build_service(repo.clone()));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            service.register("Ana", "Lee", "ana@x.com", "pw123").await
        }));
    }

    let mut created = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(DomainError::Auth(AuthError::EmailAlreadyRegistered)) => conflicts += 1,
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(conflicts, 7);
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_login_unknown_identifier_not_found() {
    let repo = Arc::new(MockAccountRepository::new());
    let service = build_service(repo);

    let result = service.login("ghost@x.com", "pw123").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::AccountNotFound))
    ));
}

#[tokio::test]
async fn test_login_wrong_password_bad_credentials() {
    let repo = Arc::new(MockAccountRepository::new());
    let service = build_service(repo);

    service
        .register("Ana", "Lee", "ana@x.com", "pw123")
        .await
        .unwrap();
    let result = service.login("ana@x.com", "wrong").await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn test_login_missing_password_rejected() {
    let repo = Arc::new(MockAccountRepository::new());
    let service = build_service(repo);

    let result = service.login("ana@x.com", "").await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(
            ValidationError::RequiredField { .. }
        ))
    ));
}

#[tokio::test]
async fn test_login_with_legacy_phone_identifier() {
    let mut seeded = Account::new(
        "Ana".to_string(),
        "Lee".to_string(),
        "ana@x.com".to_string(),
        PasswordHasher::with_cost(4).hash("pw123").unwrap(),
    );
    seeded.phone = Some("9876543210".to_string());

    let repo = Arc::new(MockAccountRepository::with_existing_account(seeded).await);
    let service = build_service(repo);

    let response = service.login("9876543210", "pw123").await.unwrap();
    assert_eq!(response.user.email, "ana@x.com");
}

#[tokio::test]
async fn test_login_corrupted_stored_hash_fails_closed() {
    let seeded = Account::new(
        "Ana".to_string(),
        "Lee".to_string(),
        "ana@x.com".to_string(),
        "garbage-not-bcrypt".to_string(),
    );
    let repo = Arc::new(MockAccountRepository::with_existing_account(seeded).await);
    let service = build_service(repo);

    let result = service.login("ana@x.com", "pw123").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn test_reset_password_swaps_credentials() {
    let repo = Arc::new(MockAccountRepository::new());
    let service = build_service(repo.clone());

    let account = service
        .register("Ana", "Lee", "ana@x.com", "old-pass")
        .await
        .unwrap();
    let old_hash = account.password_hash.clone();

    service
        .reset_password("ana@x.com", "new-pass")
        .await
        .unwrap();

    let stored = repo.find_by_email("ana@x.com").await.unwrap().unwrap();
    assert_ne!(stored.password_hash, old_hash);

    assert!(matches!(
        service.login("ana@x.com", "old-pass").await,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
    assert!(service.login("ana@x.com", "new-pass").await.is_ok());
}

#[tokio::test]
async fn test_reset_password_unknown_email_not_found() {
    let repo = Arc::new(MockAccountRepository::new());
    let service = build_service(repo);

    let result = service.reset_password("ghost@x.com", "new-pass").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::AccountNotFound))
    ));
}

#[tokio::test]
async fn test_issued_token_expires() {
    let repo = Arc::new(MockAccountRepository::new());
    // Negative TTL simulates the clock moving past expiry
    let service = build_service_with_expiry(repo, -120);

    service
        .register("Ana", "Lee", "ana@x.com", "pw123")
        .await
        .unwrap();
    let response = service.login("ana@x.com", "pw123").await.unwrap();

    let verifier = TokenService::new(TokenServiceConfig::new("test-secret"));
    assert!(matches!(
        verifier.verify(&response.token),
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}
