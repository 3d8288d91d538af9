//! In-memory implementations of the persistence and broadcast seams,
//! letting integration tests drive the full HTTP surface without MySQL
//! or Redis.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;
use serde_json::Value;

use tb_api::middleware::auth::AccessTokenVerifier;
use tb_api::routes::AppState;
use tb_core::domain::entities::notification::Notification;
use tb_core::domain::entities::task::{Task, TaskPatch};
use tb_core::domain::entities::token::RefreshToken;
use tb_core::domain::entities::user::User;
use tb_core::errors::DomainError;
use tb_core::repositories::{
    NotificationRepository, TaskRepository, TokenRepository, UserRepository,
};
use tb_core::services::auth::AuthService;
use tb_core::services::broadcast::Broadcaster;
use tb_core::services::tasks::TaskService;
use tb_core::services::token::{TokenService, TokenServiceConfig};

pub const TEST_SECRET: &str = "integration-test-secret";

#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<HashMap<String, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::Validation {
                message: "Email already registered".to_string(),
            });
        }
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.lock().unwrap();
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.lock().unwrap();
        Ok(users.get(id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryTokens {
    tokens: Mutex<HashMap<String, RefreshToken>>,
}

#[async_trait]
impl TokenRepository for InMemoryTokens {
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let mut tokens = self.tokens.lock().unwrap();
        if tokens.contains_key(&token.token) {
            return Err(DomainError::Validation {
                message: "Token already exists".to_string(),
            });
        }
        tokens.insert(token.token.clone(), token.clone());
        Ok(token)
    }

    async fn find_refresh_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError> {
        let tokens = self.tokens.lock().unwrap();
        Ok(tokens.get(token).cloned())
    }

    async fn delete_refresh_token(&self, token: &str) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.lock().unwrap();
        Ok(tokens.remove(token).is_some())
    }

    async fn delete_user_refresh_token(
        &self,
        token: &str,
        user_id: &str,
    ) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.lock().unwrap();
        match tokens.get(token) {
            Some(record) if record.user_id == user_id => {
                tokens.remove(token);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_expired_tokens(&self) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.lock().unwrap();
        let before = tokens.len();
        tokens.retain(|_, t| !t.is_expired());
        Ok(before - tokens.len())
    }
}

#[derive(Default)]
pub struct InMemoryTasks {
    tasks: Mutex<HashMap<String, Task>>,
}

#[async_trait]
impl TaskRepository for InMemoryTasks {
    async fn create_task(&self, task: Task) -> Result<Task, DomainError> {
        let mut tasks = self.tasks.lock().unwrap();
        tasks.insert(task.id.clone(), task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: &str, patch: TaskPatch) -> Result<Task, DomainError> {
        let mut tasks = self.tasks.lock().unwrap();
        let task = tasks.get_mut(id).ok_or_else(|| DomainError::NotFound {
            resource: format!("task {}", id),
        })?;
        task.apply(patch);
        Ok(task.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Task>, DomainError> {
        let tasks = self.tasks.lock().unwrap();
        Ok(tasks.get(id).cloned())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Task>, DomainError> {
        let tasks = self.tasks.lock().unwrap();
        Ok(tasks
            .values()
            .filter(|t| t.creator_id == user_id || t.assigned_to_id.as_deref() == Some(user_id))
            .cloned()
            .collect())
    }

    async fn delete_task(&self, id: &str) -> Result<(), DomainError> {
        let mut tasks = self.tasks.lock().unwrap();
        tasks.remove(id).ok_or_else(|| DomainError::NotFound {
            resource: format!("task {}", id),
        })?;
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryNotifications {
    notifications: Mutex<Vec<Notification>>,
}

#[async_trait]
impl NotificationRepository for InMemoryNotifications {
    async fn create_notification(
        &self,
        notification: Notification,
    ) -> Result<Notification, DomainError> {
        let mut notifications = self.notifications.lock().unwrap();
        notifications.push(notification.clone());
        Ok(notification)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Notification>, DomainError> {
        let notifications = self.notifications.lock().unwrap();
        let mut matching: Vec<Notification> = notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn mark_read(&self, id: &str) -> Result<Notification, DomainError> {
        let mut notifications = self.notifications.lock().unwrap();
        let notification = notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("notification {}", id),
            })?;
        notification.mark_read();
        Ok(notification.clone())
    }
}

/// One publish observed by the recording broadcaster; `target` is `None`
/// for global broadcasts
#[derive(Debug, Clone)]
pub struct RecordedEvent {
    pub target: Option<String>,
    pub event: String,
    pub payload: Value,
}

#[derive(Default)]
pub struct RecordingBroadcaster {
    events: Mutex<Vec<RecordedEvent>>,
}

impl RecordingBroadcaster {
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl Broadcaster for RecordingBroadcaster {
    async fn publish_to(
        &self,
        user_id: &str,
        event: &str,
        payload: Value,
    ) -> Result<(), DomainError> {
        self.events.lock().unwrap().push(RecordedEvent {
            target: Some(user_id.to_string()),
            event: event.to_string(),
            payload,
        });
        Ok(())
    }

    async fn publish_all(&self, event: &str, payload: Value) -> Result<(), DomainError> {
        self.events.lock().unwrap().push(RecordedEvent {
            target: None,
            event: event.to_string(),
            payload,
        });
        Ok(())
    }
}

pub type TestState =
    AppState<InMemoryUsers, InMemoryTokens, InMemoryTasks, InMemoryNotifications, RecordingBroadcaster>;

/// Everything a test needs to drive the app and inspect its effects
pub struct TestContext {
    pub state: web::Data<TestState>,
    pub verifier: Arc<dyn AccessTokenVerifier>,
    pub broadcaster: Arc<RecordingBroadcaster>,
    pub notifications: Arc<InMemoryNotifications>,
}

pub fn test_context() -> TestContext {
    let users = Arc::new(InMemoryUsers::default());
    let tasks = Arc::new(InMemoryTasks::default());
    let notifications = Arc::new(InMemoryNotifications::default());
    let broadcaster = Arc::new(RecordingBroadcaster::default());

    let config = TokenServiceConfig {
        jwt_secret: TEST_SECRET.to_string(),
        ..Default::default()
    };
    let token_service =
        Arc::new(TokenService::new(InMemoryTokens::default(), config).unwrap());

    let auth_service = Arc::new(AuthService::new(users, Arc::clone(&token_service)));
    let task_service = Arc::new(TaskService::new(
        tasks,
        Arc::clone(&notifications),
        Arc::clone(&broadcaster),
    ));

    let state = web::Data::new(AppState {
        auth_service,
        task_service,
        notifications: Arc::clone(&notifications),
        secure_cookies: false,
    });
    let verifier: Arc<dyn AccessTokenVerifier> = token_service;

    TestContext {
        state,
        verifier,
        broadcaster,
        notifications,
    }
}
