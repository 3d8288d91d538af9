//! Notification entity persisted as a side effect of task mutations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A durable notification for one recipient.
///
/// Created only by the task pipeline; the only permitted mutation afterwards
/// is flipping the read flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,

    /// Recipient identity
    pub user_id: String,

    /// Kind tag, e.g. `taskAssigned`
    #[serde(rename = "type")]
    pub kind: String,

    /// Opaque payload; the pipeline stores the task reference and title here
    pub payload: Value,

    /// Identity that caused the notification, when known
    pub actor_id: Option<String>,

    /// Whether the recipient has read the notification
    pub read: bool,

    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Creates an unread notification
    pub fn new(user_id: &str, kind: &str, payload: Value, actor_id: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            kind: kind.to_string(),
            payload,
            actor_id,
            read: false,
            created_at: Utc::now(),
        }
    }

    /// Marks the notification as read
    pub fn mark_read(&mut self) {
        self.read = true;
    }
}
