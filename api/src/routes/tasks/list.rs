use actix_web::{web, HttpResponse};

use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use tb_core::repositories::{
    NotificationRepository, TaskRepository, TokenRepository, UserRepository,
};
use tb_core::services::broadcast::Broadcaster;

/// Handler for GET /api/tasks
///
/// Lists every task the caller created or is assigned to.
pub async fn list_tasks<U, K, T, N, B>(
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
    match state.task_service.list_tasks(&auth.user_id).await {
        Ok(tasks) => HttpResponse::Ok().json(tasks),
        Err(error) => handle_domain_error(&error),
    }
}
