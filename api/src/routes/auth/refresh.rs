use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};

use crate::dto::auth::RefreshResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::REFRESH_TOKEN_COOKIE;
use crate::routes::auth::cookies::{access_token_cookie, refresh_token_cookie};
use crate::routes::AppState;

use tb_core::repositories::{
    NotificationRepository, TaskRepository, TokenRepository, UserRepository,
};
use tb_core::services::broadcast::Broadcaster;
use tb_shared::types::response::ErrorResponse;

/// Handler for POST /api/auth/refresh
///
/// Exchanges the refresh cookie for a rotated token pair. The presented
/// value is consumed; replaying it afterwards is rejected.
///
/// # Response
///
/// ## Success (200 OK)
/// `{"userId": "..."}` plus fresh `accessToken` and `refreshToken` cookies.
///
/// ## Errors
/// - 401 Unauthorized: No refresh cookie presented
/// - 403 Forbidden: Unknown, expired, or already-consumed refresh token
pub async fn refresh<U, K, T, N, B>(
    req: HttpRequest,
    state: web::Data<AppState<U, K, T, N, B>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    K: TokenRepository + 'static,
    T: TaskRepository + 'static,
    N: NotificationRepository + 'static,
    B: Broadcaster + 'static,
{
    let refresh_token = match req.cookie(REFRESH_TOKEN_COOKIE) {
        Some(cookie) => cookie.value().to_string(),
        None => {
            return HttpResponse::Unauthorized()
                .json(ErrorResponse::new("Refresh token required"))
        }
    };

    match state.auth_service.refresh_session(&refresh_token).await {
        Ok(refreshed) => HttpResponse::Ok()
            .cookie(access_token_cookie(
                &refreshed.tokens.access_token,
                state.secure_cookies,
            ))
            .cookie(refresh_token_cookie(
                &refreshed.tokens.refresh_token,
                state.secure_cookies,
            ))
            .json(RefreshResponse {
                user_id: refreshed.user_id,
            }),
        Err(error) => handle_domain_error(&error),
    }
}
