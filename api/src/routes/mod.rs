//! HTTP route handlers

pub mod auth;
pub mod notifications;
pub mod tasks;

use std::sync::Arc;

use tb_core::repositories::{
    NotificationRepository, TaskRepository, TokenRepository, UserRepository,
};
use tb_core::services::auth::AuthService;
use tb_core::services::broadcast::Broadcaster;
use tb_core::services::tasks::TaskService;

/// Application state that holds shared services
pub struct AppState<U, K, T, N, B>
where
    U: UserRepository,
    K: TokenRepository,
    T: TaskRepository,
    N: NotificationRepository,
    B: Broadcaster,
{
    pub auth_service: Arc<AuthService<U, K>>,
    pub task_service: Arc<TaskService<T, N, B>>,
    pub notifications: Arc<N>,
    /// Whether issued cookies carry the Secure attribute
    pub secure_cookies: bool,
}
