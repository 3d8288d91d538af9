use actix_web::{web, HttpResponse};

use crate::dto::auth::LoginRequest;
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use tb_core::repositories::{
    NotificationRepository, TaskRepository, TokenRepository, UserRepository,
};
use tb_core::services::broadcast::Broadcaster;
use tb_shared::types::response::ErrorResponse;

use super::session_response;

/// Handler for POST /api/auth/login
///
/// Verifies credentials, opens a session, and sets both auth cookies.
///
/// # Response
///
/// ## Success (200 OK)
/// `{"user": {"id": "...", "email": "...", "name": "..."}}` plus the
/// `accessToken` and `refreshToken` cookies.
///
/// ## Errors
/// - 400 Bad Request: Missing email or password
/// - 401 Unauthorized: Unknown email or wrong password (indistinguishable)
pub async fn login<U, K, T, N, B>(
    state: web::Data<AppState<U, K, T, N, B>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    K: TokenRepository + 'static,
    T: TaskRepository + 'static,
    N: NotificationRepository + 'static,
    B: Broadcaster + 'static,
{
    if request.email.is_empty() || request.password.is_empty() {
        return HttpResponse::BadRequest()
            .json(ErrorResponse::new("Email and password required"));
    }

    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(session) => session_response(session, state.secure_cookies),
        Err(error) => handle_domain_error(&error),
    }
}
