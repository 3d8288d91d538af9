use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};

use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::REFRESH_TOKEN_COOKIE;
use crate::routes::auth::cookies::clear_token_cookies;
use crate::routes::AppState;

use tb_core::repositories::{
    NotificationRepository, TaskRepository, TokenRepository, UserRepository,
};
use tb_core::services::broadcast::Broadcaster;
use tb_shared::types::response::AckResponse;

/// Handler for POST /api/auth/logout
///
/// Revokes the refresh cookie's token (a no-op when absent or already
/// revoked) and clears both auth cookies.
///
/// # Response
///
/// ## Success (200 OK)
/// `{"ok": true}` with removal cookies for both tokens.
pub async fn logout<U, K, T, N, B>(
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
    if let Some(cookie) = req.cookie(REFRESH_TOKEN_COOKIE) {
        if let Err(error) = state.auth_service.logout(cookie.value()).await {
            return handle_domain_error(&error);
        }
    }

    let (access, refresh) = clear_token_cookies();
    HttpResponse::Ok()
        .cookie(access)
        .cookie(refresh)
        .json(AckResponse::ok())
}
