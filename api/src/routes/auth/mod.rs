//! Authentication route handlers
//!
//! This module contains all authentication-related endpoints:
//! - Registration and login
//! - Current-user lookup
//! - Token refresh (rotation)
//! - Logout

pub mod cookies;
pub mod login;
pub mod logout;
pub mod me;
pub mod refresh;
pub mod register;

use actix_web::HttpResponse;

use tb_core::domain::value_objects::AuthSession;

use crate::dto::auth::{SessionResponse, UserResponse};

/// Build the standard session response: both auth cookies plus the user body
pub(crate) fn session_response(session: AuthSession, secure: bool) -> HttpResponse {
    HttpResponse::Ok()
        .cookie(cookies::access_token_cookie(
            &session.tokens.access_token,
            secure,
        ))
        .cookie(cookies::refresh_token_cookie(
            &session.tokens.refresh_token,
            secure,
        ))
        .json(SessionResponse {
            user: UserResponse::from(session.user),
        })
}
