//! Application factory
//!
//! Builds the Actix application with all middleware and routes wired to an
//! injected [`AppState`]. Generic over the repository and broadcaster
//! implementations so tests can run the full HTTP surface against
//! in-memory substitutes.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use crate::middleware::auth::{AccessTokenVerifier, RequireAuth};
use crate::middleware::cors::create_cors;
use crate::middleware::security::SecurityMiddleware;
use crate::routes::auth::{login::login, logout::logout, me::me, refresh::refresh, register::register};
use crate::routes::notifications::{list::list_notifications, mark_read::mark_read};
use crate::routes::tasks::{
    create::create_task, delete::delete_task, list::list_tasks, update::update_task,
};
use crate::routes::AppState;

use tb_core::repositories::{
    NotificationRepository, TaskRepository, TokenRepository, UserRepository,
};
use tb_core::services::broadcast::Broadcaster;

/// Create and configure the application with all dependencies
pub fn create_app<U, K, T, N, B>(
    app_state: web::Data<AppState<U, K, T, N, B>>,
    verifier: Arc<dyn AccessTokenVerifier>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    K: TokenRepository + 'static,
    T: TaskRepository + 'static,
    N: NotificationRepository + 'static,
    B: Broadcaster + 'static,
{
    let cors = create_cors();
    let security = SecurityMiddleware::new();

    App::new()
        .app_data(app_state)
        // Order matters: security first, then CORS, then logging
        .wrap(Logger::default())
        .wrap(cors)
        .wrap(security)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API routes
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(register::<U, K, T, N, B>))
                        .route("/login", web::post().to(login::<U, K, T, N, B>))
                        .route("/refresh", web::post().to(refresh::<U, K, T, N, B>))
                        .route("/logout", web::post().to(logout::<U, K, T, N, B>))
                        .route(
                            "/me",
                            web::get()
                                .to(me::<U, K, T, N, B>)
                                .wrap(RequireAuth::new(Arc::clone(&verifier))),
                        ),
                )
                .service(
                    web::scope("/tasks")
                        .wrap(RequireAuth::new(Arc::clone(&verifier)))
                        .route("", web::get().to(list_tasks::<U, K, T, N, B>))
                        .route("", web::post().to(create_task::<U, K, T, N, B>))
                        .route("/{id}", web::put().to(update_task::<U, K, T, N, B>))
                        .route("/{id}", web::delete().to(delete_task::<U, K, T, N, B>)),
                )
                .service(
                    web::scope("/notifications")
                        .wrap(RequireAuth::new(Arc::clone(&verifier)))
                        .route("", web::get().to(list_notifications::<U, K, T, N, B>))
                        .route("/{id}/read", web::post().to(mark_read::<U, K, T, N, B>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "taskboard-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "The requested resource was not found"
    }))
}
