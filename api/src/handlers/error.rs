//! Mapping from domain errors to HTTP responses.
//!
//! The single place where `DomainError` meets the wire. Internal detail
//! (database messages, token internals) stays in the logs.

use actix_web::HttpResponse;

use tb_core::errors::{AuthError, DomainError, TokenError};
use tb_shared::types::response::ErrorResponse;

/// Convert a domain error into the appropriate HTTP response
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(AuthError::InvalidCredentials) => {
            HttpResponse::Unauthorized().json(ErrorResponse::new("Invalid credentials"))
        }
        DomainError::Auth(AuthError::UserAlreadyExists) => {
            HttpResponse::Conflict().json(ErrorResponse::new("Email already registered"))
        }
        DomainError::Auth(AuthError::UserNotFound) => {
            HttpResponse::NotFound().json(ErrorResponse::new("User not found"))
        }
        DomainError::Token(TokenError::InvalidRefreshToken) => {
            HttpResponse::Forbidden().json(ErrorResponse::new("Invalid refresh token"))
        }
        DomainError::Token(TokenError::InvalidAccessToken) => {
            HttpResponse::Forbidden().json(ErrorResponse::new("Invalid or expired token"))
        }
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new(message.clone()))
        }
        DomainError::NotFound { resource } => {
            HttpResponse::NotFound().json(ErrorResponse::new(format!("Not found: {}", resource)))
        }
        DomainError::Token(_) | DomainError::Database { .. } | DomainError::Internal { .. } => {
            log::error!("API Error: {}", error);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Internal server error"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_credential_errors_map_to_4xx() {
        let resp = handle_domain_error(&DomainError::Auth(AuthError::InvalidCredentials));
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = handle_domain_error(&DomainError::Token(TokenError::InvalidRefreshToken));
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_internal_errors_do_not_leak() {
        let resp = handle_domain_error(&DomainError::Database {
            message: "connection refused to db-prod-3".to_string(),
        });
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
