use actix_web::{web, HttpResponse};

use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use tb_core::repositories::{
    NotificationRepository, TaskRepository, TokenRepository, UserRepository,
};
use tb_core::services::broadcast::Broadcaster;

/// Handler for POST /api/notifications/{id}/read
///
/// Marks one notification read and returns the updated record.
pub async fn mark_read<U, K, T, N, B>(
    state: web::Data<AppState<U, K, T, N, B>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    K: TokenRepository + 'static,
    T: TaskRepository + 'static,
    N: NotificationRepository + 'static,
    B: Broadcaster + 'static,
{
    let id = path.into_inner();
    match state.notifications.mark_read(&id).await {
        Ok(notification) => HttpResponse::Ok().json(notification),
        Err(error) => handle_domain_error(&error),
    }
}
