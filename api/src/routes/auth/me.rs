use actix_web::{web, HttpResponse};

use crate::dto::auth::UserResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use tb_core::repositories::{
    NotificationRepository, TaskRepository, TokenRepository, UserRepository,
};
use tb_core::services::broadcast::Broadcaster;

/// Handler for GET /api/auth/me
///
/// Returns the authenticated user's profile. Requires authentication.
pub async fn me<U, K, T, N, B>(
    state: web::Data<AppState<U, K, T, N, B>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    K: TokenRepository + 'static,
    T: TaskRepository + 'static,
    N: NotificationRepository + 'static,
    B: Broadcaster + 'static,
{
    match state.auth_service.current_user(&auth.user_id).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(&error),
    }
}
