//! Uniform mapping from domain errors to HTTP responses.
//!
//! Every handler funnels failures through `to_response` so status codes
//! and body shapes stay consistent across routes. Internal faults are
//! logged server-side and answered with a generic body.

use actix_web::HttpResponse;

use vc_core::errors::{AuthError, DomainError, TokenError, ValidationError};
use vc_shared::types::response::ErrorResponse;

/// Convert a domain error into the HTTP response the client sees
pub fn to_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth_error) => auth_response(auth_error),
        DomainError::ValidationErr(validation_error) => validation_response(validation_error),
        DomainError::Token(token_error) => token_response(token_error),
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("VALIDATION_ERROR", message))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "NOT_FOUND",
            format!("{} not found", resource),
        )),
        DomainError::Unauthorized => {
            HttpResponse::Unauthorized().json(ErrorResponse::new("UNAUTHORIZED", "Unauthorized"))
        }
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("INTERNAL_ERROR", "Internal server error"))
        }
    }
}

fn auth_response(error: &AuthError) -> HttpResponse {
    let body = ErrorResponse::new(error.error_code(), error.to_string());
    match error {
        // The mobile client expects 404 for an unknown login identifier
        AuthError::AccountNotFound => HttpResponse::NotFound().json(body),
        AuthError::EmailAlreadyRegistered | AuthError::InvalidCredentials => {
            HttpResponse::BadRequest().json(body)
        }
    }
}

/// Reject a request whose DTO failed `validator` checks
pub fn validation_failed(errors: &validator::ValidationErrors) -> HttpResponse {
    let fields: Vec<&str> = errors.field_errors().keys().copied().collect();
    HttpResponse::BadRequest().json(ErrorResponse::new(
        "INVALID_FORMAT",
        format!("Invalid value for field(s): {}", fields.join(", ")),
    ))
}

fn validation_response(error: &ValidationError) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(error.error_code(), error.to_string()))
}

fn token_response(error: &TokenError) -> HttpResponse {
    match error {
        TokenError::TokenGenerationFailed => {
            log::error!("Token generation failed");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("INTERNAL_ERROR", "Internal server error"))
        }
        _ => HttpResponse::Unauthorized()
            .json(ErrorResponse::new(error.error_code(), error.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_not_found_maps_to_404() {
        let response = to_response(&DomainError::Auth(AuthError::AccountNotFound));
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_credentials_maps_to_400() {
        let response = to_response(&DomainError::Auth(AuthError::InvalidCredentials));
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_missing_field_maps_to_400() {
        let response = to_response(&DomainError::ValidationErr(ValidationError::required(
            "email",
        )));
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_expired_token_maps_to_401() {
        let response = to_response(&DomainError::Token(TokenError::TokenExpired));
        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let response = to_response(&DomainError::Internal {
            message: "connection refused to 10.0.0.5".to_string(),
        });
        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
