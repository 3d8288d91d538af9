//! Task entity and the input/patch shapes used by the mutation pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

/// Task workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "To_Do")]
    ToDo,
    #[serde(rename = "In_Progress")]
    InProgress,
    Review,
    Completed,
}

/// A tracked task.
///
/// `assigned_to_id` is nullable in the schema but is always populated on
/// creation: an unassigned task is assigned to its creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub creator_id: String,
    pub assigned_to_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in the `To_Do` state
    pub fn new(input: NewTask, creator_id: &str, assigned_to_id: Option<String>) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            description: input.description,
            due_date: input.due_date,
            priority: input.priority,
            status: TaskStatus::ToDo,
            creator_id: creator_id.to_string(),
            assigned_to_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a partial update, bumping `updated_at`.
    ///
    /// Shared by every store implementation so patch semantics cannot drift
    /// between them.
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(assigned_to_id) = patch.assigned_to_id {
            self.assigned_to_id = Some(assigned_to_id);
        }
        self.updated_at = Utc::now();
    }
}

/// Input for creating a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub priority: TaskPriority,
    pub assigned_to_id: Option<String>,
}

/// Partial update applied to an existing task
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    pub assigned_to_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> NewTask {
        NewTask {
            title: "Write report".to_string(),
            description: "Quarterly numbers".to_string(),
            due_date: Utc::now(),
            priority: TaskPriority::Medium,
            assigned_to_id: None,
        }
    }

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new(sample_input(), "alice", Some("bob".to_string()));

        assert_eq!(task.status, TaskStatus::ToDo);
        assert_eq!(task.creator_id, "alice");
        assert_eq!(task.assigned_to_id.as_deref(), Some("bob"));
    }

    #[test]
    fn test_apply_patch() {
        let mut task = Task::new(sample_input(), "alice", Some("alice".to_string()));

        task.apply(TaskPatch {
            status: Some(TaskStatus::InProgress),
            title: Some("Write the report".to_string()),
            ..Default::default()
        });

        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.title, "Write the report");
        // Untouched fields survive the patch
        assert_eq!(task.priority, TaskPriority::Medium);
    }

    #[test]
    fn test_status_wire_spelling() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"In_Progress\"");

        let parsed: TaskStatus = serde_json::from_str("\"To_Do\"").unwrap();
        assert_eq!(parsed, TaskStatus::ToDo);
    }
}
