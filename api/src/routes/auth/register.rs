use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::RegisterRequest;
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use tb_core::repositories::{
    NotificationRepository, TaskRepository, TokenRepository, UserRepository,
};
use tb_core::services::broadcast::Broadcaster;
use tb_shared::types::response::ErrorResponse;

use super::session_response;

/// Handler for POST /api/auth/register
///
/// Creates an account, opens a session, and sets both auth cookies.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "alice@example.com",
///     "password": "secret1",
///     "name": "Alice"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// `{"user": {"id": "...", "email": "...", "name": "..."}}` plus the
/// `accessToken` and `refreshToken` cookies.
///
/// ## Errors
/// - 400 Bad Request: Invalid email, short password, or missing name
/// - 409 Conflict: Email already registered
pub async fn register<U, K, T, N, B>(
    state: web::Data<AppState<U, K, T, N, B>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    K: TokenRepository + 'static,
    T: TaskRepository + 'static,
    N: NotificationRepository + 'static,
    B: Broadcaster + 'static,
{
    if let Err(errors) = request.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(errors.to_string()));
    }

    match state
        .auth_service
        .register(&request.email, &request.password, &request.name)
        .await
    {
        Ok(session) => session_response(session, state.secure_cookies),
        Err(error) => handle_domain_error(&error),
    }
}
