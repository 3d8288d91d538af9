use actix_web::{web, HttpResponse};

use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use tb_core::repositories::{
    NotificationRepository, TaskRepository, TokenRepository, UserRepository,
};
use tb_core::services::broadcast::Broadcaster;

/// Handler for GET /api/notifications
///
/// Lists the caller's notifications, newest first.
pub async fn list_notifications<U, K, T, N, B>(
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
    match state.notifications.list_for_user(&auth.user_id).await {
        Ok(notifications) => HttpResponse::Ok().json(notifications),
        Err(error) => handle_domain_error(&error),
    }
}
