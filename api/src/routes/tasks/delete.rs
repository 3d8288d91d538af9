use actix_web::{web, HttpResponse};

use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use tb_core::repositories::{
    NotificationRepository, TaskRepository, TokenRepository, UserRepository,
};
use tb_core::services::broadcast::Broadcaster;

/// Handler for DELETE /api/tasks/{id}
///
/// Deletes a task. No notification or broadcast follows a deletion.
pub async fn delete_task<U, K, T, N, B>(
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
    let task_id = path.into_inner();
    match state.task_service.delete_task(&task_id).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "message": "Task deleted" })),
        Err(error) => handle_domain_error(&error),
    }
}
