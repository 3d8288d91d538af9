use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::task::UpdateTaskRequest;
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use tb_core::repositories::{
    NotificationRepository, TaskRepository, TokenRepository, UserRepository,
};
use tb_core::services::broadcast::Broadcaster;
use tb_shared::types::response::ErrorResponse;

/// Handler for PUT /api/tasks/{id}
///
/// Applies a partial update through the pipeline, which then broadcasts
/// the updated task to every connected client.
///
/// # Errors
/// - 400 Bad Request: Invalid body shape
/// - 404 Not Found: No task with this id
pub async fn update_task<U, K, T, N, B>(
    state: web::Data<AppState<U, K, T, N, B>>,
    path: web::Path<String>,
    request: web::Json<UpdateTaskRequest>,
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

    let task_id = path.into_inner();
    match state
        .task_service
        .update_task(&task_id, request.into_inner().into_patch())
        .await
    {
        Ok(updated) => HttpResponse::Ok().json(updated.task),
        Err(error) => handle_domain_error(&error),
    }
}
