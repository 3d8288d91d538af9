//! Notification repository trait defining the interface for notification persistence.

use async_trait::async_trait;

use crate::domain::entities::notification::Notification;
use crate::errors::DomainError;

/// Repository contract for notification records
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Persist a new notification.
    ///
    /// # Returns
    /// * `Ok(Notification)` - The written record
    /// * `Err(DomainError)` - Write failed; the task pipeline absorbs this
    async fn create_notification(
        &self,
        notification: Notification,
    ) -> Result<Notification, DomainError>;

    /// List a recipient's notifications, newest first
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Notification>, DomainError>;

    /// Flip the read flag on a notification.
    ///
    /// # Returns
    /// * `Ok(Notification)` - The updated record
    /// * `Err(DomainError::NotFound)` - No notification with this id
    async fn mark_read(&self, id: &str) -> Result<Notification, DomainError>;
}
