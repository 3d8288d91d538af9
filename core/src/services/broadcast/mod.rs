//! Real-time broadcast seam.
//!
//! The transport (socket layer, pub/sub fabric) lives outside this crate;
//! services only see this trait. Targeted and global publishing are two
//! distinct operations on purpose: they share a shape but not an intent,
//! and folding them into one parameterized call invites silent drift
//! between the two addressing modes.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::DomainError;

/// Publish/subscribe handle keyed by identity ("room") or global
#[async_trait]
pub trait Broadcaster: Send + Sync {
    /// Publish an event to a single identity's channel
    async fn publish_to(&self, user_id: &str, event: &str, payload: Value)
        -> Result<(), DomainError>;

    /// Publish an event to every connected client
    async fn publish_all(&self, event: &str, payload: Value) -> Result<(), DomainError>;
}

#[cfg(test)]
pub mod mock;
#[cfg(test)]
pub use mock::MockBroadcaster;
