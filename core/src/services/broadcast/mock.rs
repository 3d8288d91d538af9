//! Recording mock implementation of Broadcaster for testing

use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::errors::DomainError;

use super::Broadcaster;

/// A publish observed by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Published {
    /// Targeted publish to one identity's channel
    To {
        user_id: String,
        event: String,
        payload: Value,
    },
    /// Global publish to all connected clients
    All { event: String, payload: Value },
}

/// Broadcaster mock that records every publish.
///
/// Publishing can be switched to fail so pipeline tests can assert that a
/// failed broadcast never fails the primary mutation.
#[derive(Default)]
pub struct MockBroadcaster {
    published: Arc<Mutex<Vec<Published>>>,
    fail_publishes: AtomicBool,
}

impl MockBroadcaster {
    /// Create a new mock broadcaster
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent publish fail
    pub fn fail_publishes(&self, fail: bool) {
        self.fail_publishes.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of everything published, in order
    pub async fn published(&self) -> Vec<Published> {
        self.published.lock().await.clone()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail_publishes.load(Ordering::SeqCst) {
            return Err(DomainError::Internal {
                message: "simulated broadcast failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Broadcaster for MockBroadcaster {
    async fn publish_to(
        &self,
        user_id: &str,
        event: &str,
        payload: Value,
    ) -> Result<(), DomainError> {
        self.check()?;
        self.published.lock().await.push(Published::To {
            user_id: user_id.to_string(),
            event: event.to_string(),
            payload,
        });
        Ok(())
    }

    async fn publish_all(&self, event: &str, payload: Value) -> Result<(), DomainError> {
        self.check()?;
        self.published.lock().await.push(Published::All {
            event: event.to_string(),
            payload,
        });
        Ok(())
    }
}
