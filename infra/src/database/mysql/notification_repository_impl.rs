//! MySQL implementation of the NotificationRepository trait.
//!
//! The opaque payload is stored as a JSON text column; it is never
//! inspected here, only round-tripped.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{MySqlPool, Row};

use tb_core::domain::entities::notification::Notification;
use tb_core::errors::DomainError;
use tb_core::repositories::NotificationRepository;

/// MySQL implementation of NotificationRepository
pub struct MySqlNotificationRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlNotificationRepository {
    /// Create a new MySQL notification repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_notification(row: &sqlx::mysql::MySqlRow) -> Result<Notification, DomainError> {
        let payload: String = row.try_get("payload").map_err(|e| db_error("payload", e))?;

        Ok(Notification {
            id: row.try_get("id").map_err(|e| db_error("id", e))?,
            user_id: row.try_get("user_id").map_err(|e| db_error("user_id", e))?,
            kind: row.try_get("kind").map_err(|e| db_error("kind", e))?,
            payload: serde_json::from_str(&payload).unwrap_or(Value::Null),
            actor_id: row
                .try_get("actor_id")
                .map_err(|e| db_error("actor_id", e))?,
            read: row.try_get("is_read").map_err(|e| db_error("is_read", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| db_error("created_at", e))?,
        })
    }
}

fn db_error(context: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::Database {
        message: format!("Failed to get {}: {}", context, e),
    }
}

#[async_trait]
impl NotificationRepository for MySqlNotificationRepository {
    async fn create_notification(
        &self,
        notification: Notification,
    ) -> Result<Notification, DomainError> {
        let payload =
            serde_json::to_string(&notification.payload).map_err(|e| DomainError::Internal {
                message: format!("Failed to serialize payload: {}", e),
            })?;

        let query = r#"
            INSERT INTO notifications (id, user_id, kind, payload, actor_id, is_read, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(&notification.id)
            .bind(&notification.user_id)
            .bind(&notification.kind)
            .bind(&payload)
            .bind(&notification.actor_id)
            .bind(notification.read)
            .bind(notification.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create notification: {}", e),
            })?;

        Ok(notification)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Notification>, DomainError> {
        let query = r#"
            SELECT id, user_id, kind, payload, actor_id, is_read, created_at
            FROM notifications
            WHERE user_id = ?
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        rows.iter().map(Self::row_to_notification).collect()
    }

    async fn mark_read(&self, id: &str) -> Result<Notification, DomainError> {
        let query = r#"
            SELECT id, user_id, kind, payload, actor_id, is_read, created_at
            FROM notifications
            WHERE id = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("notification {}", id),
            })?;

        let mut notification = Self::row_to_notification(&row)?;

        // Marking an already-read notification is a no-op, so rows_affected
        // cannot be used as the existence check here.
        sqlx::query("UPDATE notifications SET is_read = TRUE WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to mark notification read: {}", e),
            })?;

        notification.mark_read();
        Ok(notification)
    }
}
