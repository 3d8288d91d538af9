//! Task pipeline implementation

use std::sync::Arc;

use serde_json::json;
use tracing::warn;

use crate::domain::entities::notification::Notification;
use crate::domain::entities::task::{NewTask, Task, TaskPatch};
use crate::errors::DomainError;
use crate::repositories::{NotificationRepository, TaskRepository};
use crate::services::broadcast::Broadcaster;

use super::{TASK_ASSIGNED_EVENT, TASK_UPDATED_EVENT};

/// Outcome of one best-effort follow-up to a primary write.
///
/// Failures land here instead of in the operation result: the caller can see
/// that a notification or publish did not go out, but the mutation itself
/// has already succeeded and stays successful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffect {
    /// The follow-up ran to completion
    Completed,
    /// The follow-up failed; logged and absorbed
    Failed,
    /// The follow-up did not apply (no interested identity)
    Skipped,
}

impl SideEffect {
    pub fn is_completed(&self) -> bool {
        matches!(self, SideEffect::Completed)
    }

    /// Fold a follow-up result into an outcome, logging the failure
    fn observe(operation: &str, result: Result<(), DomainError>) -> Self {
        match result {
            Ok(()) => SideEffect::Completed,
            Err(error) => {
                warn!("Best-effort {} failed: {}", operation, error);
                SideEffect::Failed
            }
        }
    }
}

/// Result of creating a task through the pipeline
#[derive(Debug, Clone)]
pub struct TaskCreated {
    pub task: Task,
    pub notification: SideEffect,
    pub broadcast: SideEffect,
}

/// Result of updating a task through the pipeline
#[derive(Debug, Clone)]
pub struct TaskUpdated {
    pub task: Task,
    pub broadcast: SideEffect,
}

/// Orchestrates task mutations and their follow-up effects.
///
/// All three collaborators are injected handles; the service holds no
/// global state and can be constructed per test with substitute stores.
pub struct TaskService<T, N, B>
where
    T: TaskRepository,
    N: NotificationRepository,
    B: Broadcaster,
{
    tasks: Arc<T>,
    notifications: Arc<N>,
    broadcaster: Arc<B>,
}

impl<T, N, B> TaskService<T, N, B>
where
    T: TaskRepository,
    N: NotificationRepository,
    B: Broadcaster,
{
    /// Creates a new task service
    pub fn new(tasks: Arc<T>, notifications: Arc<N>, broadcaster: Arc<B>) -> Self {
        Self {
            tasks,
            notifications,
            broadcaster,
        }
    }

    /// Creates a task, then notifies and publishes to the assignee.
    ///
    /// An unassigned task is assigned to its creator, so the creator of a
    /// solo task receives their own assignment notification. The write is
    /// the only step that can fail the call; the two follow-ups run
    /// concurrently after it, and neither observes the other's outcome.
    pub async fn create_task(
        &self,
        input: NewTask,
        creator_id: &str,
    ) -> Result<TaskCreated, DomainError> {
        let assignee = input
            .assigned_to_id
            .clone()
            .unwrap_or_else(|| creator_id.to_string());

        let task = self
            .tasks
            .create_task(Task::new(input, creator_id, Some(assignee)))
            .await?;

        let (notification, broadcast) = match task.assigned_to_id.clone() {
            Some(assignee) => tokio::join!(
                async {
                    SideEffect::observe(
                        "notification persist",
                        self.persist_assignment_notification(&task, &assignee, creator_id)
                            .await,
                    )
                },
                async {
                    SideEffect::observe(
                        "assignment publish",
                        self.publish_to_assignee(&task, &assignee).await,
                    )
                },
            ),
            None => (SideEffect::Skipped, SideEffect::Skipped),
        };

        Ok(TaskCreated {
            task,
            notification,
            broadcast,
        })
    }

    /// Applies a patch to a task, then broadcasts the update globally.
    ///
    /// Deliberately different addressing from creation: updates go to every
    /// connected client, not just the assignee's channel.
    pub async fn update_task(
        &self,
        task_id: &str,
        patch: TaskPatch,
    ) -> Result<TaskUpdated, DomainError> {
        let task = self.tasks.update_task(task_id, patch).await?;

        let broadcast =
            SideEffect::observe("update publish", self.publish_update(&task).await);

        Ok(TaskUpdated { task, broadcast })
    }

    /// Lists every task the user created or is assigned to
    pub async fn list_tasks(&self, user_id: &str) -> Result<Vec<Task>, DomainError> {
        self.tasks.list_for_user(user_id).await
    }

    /// Looks up a single task
    pub async fn find_task(&self, task_id: &str) -> Result<Option<Task>, DomainError> {
        self.tasks.find_by_id(task_id).await
    }

    /// Deletes a task. No follow-up effects.
    pub async fn delete_task(&self, task_id: &str) -> Result<(), DomainError> {
        self.tasks.delete_task(task_id).await
    }

    async fn persist_assignment_notification(
        &self,
        task: &Task,
        assignee: &str,
        creator_id: &str,
    ) -> Result<(), DomainError> {
        let notification = Notification::new(
            assignee,
            TASK_ASSIGNED_EVENT,
            json!({ "taskId": task.id, "title": task.title }),
            Some(creator_id.to_string()),
        );
        self.notifications.create_notification(notification).await?;
        Ok(())
    }

    async fn publish_to_assignee(&self, task: &Task, assignee: &str) -> Result<(), DomainError> {
        self.broadcaster
            .publish_to(assignee, TASK_ASSIGNED_EVENT, task_payload(task)?)
            .await
    }

    async fn publish_update(&self, task: &Task) -> Result<(), DomainError> {
        self.broadcaster
            .publish_all(TASK_UPDATED_EVENT, task_payload(task)?)
            .await
    }
}

/// Serialize the full task for the real-time channel
fn task_payload(task: &Task) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(task).map_err(|e| DomainError::Internal {
        message: format!("Failed to serialize task: {}", e),
    })
}
