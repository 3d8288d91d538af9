//! Task request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use tb_core::domain::entities::task::{NewTask, TaskPatch, TaskPriority, TaskStatus};

/// Request body for POST /api/tasks
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    pub description: String,

    pub due_date: DateTime<Utc>,

    pub priority: TaskPriority,

    pub assigned_to_id: Option<String>,
}

impl CreateTaskRequest {
    pub fn into_input(self) -> NewTask {
        NewTask {
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            priority: self.priority,
            assigned_to_id: self.assigned_to_id,
        }
    }
}

/// Request body for PUT /api/tasks/{id}
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: Option<String>,

    pub description: Option<String>,

    pub due_date: Option<DateTime<Utc>>,

    pub priority: Option<TaskPriority>,

    pub status: Option<TaskStatus>,

    pub assigned_to_id: Option<String>,
}

impl UpdateTaskRequest {
    pub fn into_patch(self) -> TaskPatch {
        TaskPatch {
            title: self.title,
            description: self.description,
            due_date: self.due_date,
            priority: self.priority,
            status: self.status,
            assigned_to_id: self.assigned_to_id,
        }
    }
}
