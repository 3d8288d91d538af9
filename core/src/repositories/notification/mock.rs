//! Mock implementation of NotificationRepository for testing

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::notification::Notification;
use crate::errors::DomainError;

use super::r#trait::NotificationRepository;

/// In-memory notification repository for testing.
///
/// Creation can be switched to fail so pipeline tests can assert that a
/// failed notification write never fails the primary mutation.
#[derive(Default)]
pub struct MockNotificationRepository {
    notifications: Arc<RwLock<Vec<Notification>>>,
    fail_writes: AtomicBool,
}

impl MockNotificationRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent create fail with a database error
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of everything stored, insertion order
    pub async fn stored(&self) -> Vec<Notification> {
        self.notifications.read().await.clone()
    }
}

#[async_trait]
impl NotificationRepository for MockNotificationRepository {
    async fn create_notification(
        &self,
        notification: Notification,
    ) -> Result<Notification, DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Database {
                message: "simulated write failure".to_string(),
            });
        }

        let mut notifications = self.notifications.write().await;
        notifications.push(notification.clone());
        Ok(notification)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Notification>, DomainError> {
        let notifications = self.notifications.read().await;
        let mut matching: Vec<Notification> = notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn mark_read(&self, id: &str) -> Result<Notification, DomainError> {
        let mut notifications = self.notifications.write().await;

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
