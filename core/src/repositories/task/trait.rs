//! Task repository trait defining the interface for task persistence.

use async_trait::async_trait;

use crate::domain::entities::task::{Task, TaskPatch};
use crate::errors::DomainError;

/// Repository contract for task records
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persist a new task.
    ///
    /// # Returns
    /// * `Ok(Task)` - The written task
    /// * `Err(DomainError)` - Write failed
    async fn create_task(&self, task: Task) -> Result<Task, DomainError>;

    /// Apply a partial update to the task with the given id.
    ///
    /// # Returns
    /// * `Ok(Task)` - The updated task
    /// * `Err(DomainError::NotFound)` - No task with this id
    async fn update_task(&self, id: &str, patch: TaskPatch) -> Result<Task, DomainError>;

    /// Look up a task by id
    async fn find_by_id(&self, id: &str) -> Result<Option<Task>, DomainError>;

    /// List every task the user created or is assigned to
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Task>, DomainError>;

    /// Delete a task by id.
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No task with this id
    async fn delete_task(&self, id: &str) -> Result<(), DomainError>;
}
