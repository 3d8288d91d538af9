use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::task::CreateTaskRequest;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use tb_core::repositories::{
    NotificationRepository, TaskRepository, TokenRepository, UserRepository,
};
use tb_core::services::broadcast::Broadcaster;
use tb_shared::types::response::ErrorResponse;

/// Handler for POST /api/tasks
///
/// Creates a task through the pipeline. The task lands durably before the
/// assignee's notification and real-time event are attempted; those two
/// never affect this endpoint's outcome.
///
/// # Response
///
/// ## Success (200 OK)
/// The created task.
///
/// ## Errors
/// - 400 Bad Request: Invalid title or body shape
/// - 500 Internal Server Error: The task write itself failed
pub async fn create_task<U, K, T, N, B>(
    state: web::Data<AppState<U, K, T, N, B>>,
    auth: AuthContext,
    request: web::Json<CreateTaskRequest>,
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
        .task_service
        .create_task(request.into_inner().into_input(), &auth.user_id)
        .await
    {
        Ok(created) => HttpResponse::Ok().json(created.task),
        Err(error) => handle_domain_error(&error),
    }
}
