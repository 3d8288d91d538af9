//! Mock implementation of TaskRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::task::{Task, TaskPatch};
use crate::errors::DomainError;

use super::r#trait::TaskRepository;

/// In-memory task repository for testing.
///
/// Writes can be switched to fail so pipeline tests can exercise the
/// primary-write failure path.
#[derive(Default)]
pub struct MockTaskRepository {
    tasks: Arc<RwLock<HashMap<String, Task>>>,
    fail_writes: AtomicBool,
}

impl MockTaskRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with a database error
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writes(&self) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Database {
                message: "simulated write failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn create_task(&self, task: Task) -> Result<Task, DomainError> {
        self.check_writes()?;
        let mut tasks = self.tasks.write().await;
        tasks.insert(task.id.clone(), task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: &str, patch: TaskPatch) -> Result<Task, DomainError> {
        self.check_writes()?;
        let mut tasks = self.tasks.write().await;

        let task = tasks.get_mut(id).ok_or_else(|| DomainError::NotFound {
            resource: format!("task {}", id),
        })?;
        task.apply(patch);
        Ok(task.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Task>, DomainError> {
        let tasks = self.tasks.read().await;
        Ok(tasks.get(id).cloned())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Task>, DomainError> {
        let tasks = self.tasks.read().await;
        Ok(tasks
            .values()
            .filter(|t| t.creator_id == user_id || t.assigned_to_id.as_deref() == Some(user_id))
            .cloned()
            .collect())
    }

    async fn delete_task(&self, id: &str) -> Result<(), DomainError> {
        self.check_writes()?;
        let mut tasks = self.tasks.write().await;

        tasks.remove(id).ok_or_else(|| DomainError::NotFound {
            resource: format!("task {}", id),
        })?;
        Ok(())
    }
}
