//! Background cleanup of expired refresh tokens
//!
//! Expired records are already reaped lazily on lookup; this task sweeps the
//! rows nobody ever looks up again so they do not accumulate.

use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use crate::repositories::TokenRepository;

/// Configuration for the token cleanup task
#[derive(Debug, Clone)]
pub struct TokenCleanupConfig {
    /// How often to run cleanup (in seconds)
    pub interval_seconds: u64,
    /// Whether to run the task at all
    pub enabled: bool,
}

impl Default for TokenCleanupConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 3600, // Run every hour
            enabled: true,
        }
    }
}

/// Periodic sweeper for expired refresh tokens
pub struct TokenCleanupService<R: TokenRepository + 'static> {
    repository: Arc<R>,
    config: TokenCleanupConfig,
}

impl<R: TokenRepository> TokenCleanupService<R> {
    /// Create a new cleanup service
    pub fn new(repository: Arc<R>, config: TokenCleanupConfig) -> Self {
        Self { repository, config }
    }

    /// Run a single cleanup cycle.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of expired tokens deleted
    pub async fn run_cleanup(&self) -> Result<usize, crate::errors::DomainError> {
        let deleted = self.repository.delete_expired_tokens().await?;
        if deleted > 0 {
            info!("Deleted {} expired refresh tokens", deleted);
        }
        Ok(deleted)
    }

    /// Spawn the periodic cleanup loop onto the current runtime.
    ///
    /// Returns immediately; the loop runs until the process exits. Errors
    /// are logged and the loop keeps going, since a failed sweep only
    /// delays reclamation.
    pub fn spawn(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            if !self.config.enabled {
                return;
            }

            let mut interval =
                tokio::time::interval(Duration::from_secs(self.config.interval_seconds));
            loop {
                interval.tick().await;
                if let Err(e) = self.run_cleanup().await {
                    error!("Refresh token cleanup failed: {}", e);
                }
            }
        })
    }
}
