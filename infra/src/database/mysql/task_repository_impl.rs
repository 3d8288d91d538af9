//! MySQL implementation of the TaskRepository trait.
//!
//! Updates read the current row, apply the patch through the entity's own
//! `apply` so patch semantics match the in-memory store, then write the
//! full column set back.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use tb_core::domain::entities::task::{Task, TaskPatch, TaskPriority, TaskStatus};
use tb_core::errors::DomainError;
use tb_core::repositories::TaskRepository;

/// MySQL implementation of TaskRepository
pub struct MySqlTaskRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTaskRepository {
    /// Create a new MySQL task repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_task(row: &sqlx::mysql::MySqlRow) -> Result<Task, DomainError> {
        let priority: String = row
            .try_get("priority")
            .map_err(|e| db_error("priority", e))?;
        let status: String = row.try_get("status").map_err(|e| db_error("status", e))?;

        Ok(Task {
            id: row.try_get("id").map_err(|e| db_error("id", e))?,
            title: row.try_get("title").map_err(|e| db_error("title", e))?,
            description: row
                .try_get("description")
                .map_err(|e| db_error("description", e))?,
            due_date: row
                .try_get::<DateTime<Utc>, _>("due_date")
                .map_err(|e| db_error("due_date", e))?,
            priority: priority_from_str(&priority),
            status: status_from_str(&status),
            creator_id: row
                .try_get("creator_id")
                .map_err(|e| db_error("creator_id", e))?,
            assigned_to_id: row
                .try_get("assigned_to_id")
                .map_err(|e| db_error("assigned_to_id", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| db_error("updated_at", e))?,
        })
    }
}

fn db_error(context: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::Database {
        message: format!("Failed to get {}: {}", context, e),
    }
}

fn priority_to_str(priority: TaskPriority) -> &'static str {
    match priority {
        TaskPriority::Low => "Low",
        TaskPriority::Medium => "Medium",
        TaskPriority::High => "High",
        TaskPriority::Urgent => "Urgent",
    }
}

fn priority_from_str(s: &str) -> TaskPriority {
    match s {
        "Low" => TaskPriority::Low,
        "High" => TaskPriority::High,
        "Urgent" => TaskPriority::Urgent,
        _ => TaskPriority::Medium,
    }
}

fn status_to_str(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::ToDo => "To_Do",
        TaskStatus::InProgress => "In_Progress",
        TaskStatus::Review => "Review",
        TaskStatus::Completed => "Completed",
    }
}

fn status_from_str(s: &str) -> TaskStatus {
    match s {
        "In_Progress" => TaskStatus::InProgress,
        "Review" => TaskStatus::Review,
        "Completed" => TaskStatus::Completed,
        _ => TaskStatus::ToDo,
    }
}

#[async_trait]
impl TaskRepository for MySqlTaskRepository {
    async fn create_task(&self, task: Task) -> Result<Task, DomainError> {
        let query = r#"
            INSERT INTO tasks
                (id, title, description, due_date, priority, status,
                 creator_id, assigned_to_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(&task.id)
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.due_date)
            .bind(priority_to_str(task.priority))
            .bind(status_to_str(task.status))
            .bind(&task.creator_id)
            .bind(&task.assigned_to_id)
            .bind(task.created_at)
            .bind(task.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create task: {}", e),
            })?;

        Ok(task)
    }

    async fn update_task(&self, id: &str, patch: TaskPatch) -> Result<Task, DomainError> {
        let mut task = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("task {}", id),
            })?;

        task.apply(patch);

        let query = r#"
            UPDATE tasks
            SET title = ?, description = ?, due_date = ?, priority = ?,
                status = ?, assigned_to_id = ?, updated_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.due_date)
            .bind(priority_to_str(task.priority))
            .bind(status_to_str(task.status))
            .bind(&task.assigned_to_id)
            .bind(task.updated_at)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update task: {}", e),
            })?;

        Ok(task)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Task>, DomainError> {
        let query = r#"
            SELECT id, title, description, due_date, priority, status,
                   creator_id, assigned_to_id, created_at, updated_at
            FROM tasks
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_task(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Task>, DomainError> {
        let query = r#"
            SELECT id, title, description, due_date, priority, status,
                   creator_id, assigned_to_id, created_at, updated_at
            FROM tasks
            WHERE creator_id = ? OR assigned_to_id = ?
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        rows.iter().map(Self::row_to_task).collect()
    }

    async fn delete_task(&self, id: &str) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete task: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("task {}", id),
            });
        }
        Ok(())
    }
}
