//! Redis pub/sub implementation of the Broadcaster trait.
//!
//! Targeted events go to a per-identity channel, global events to a single
//! shared channel; the websocket gateway subscribes on the other side and
//! relays messages to connected clients. Messages carry the event name and
//! payload as one JSON document.

use async_trait::async_trait;
use redis::{aio::MultiplexedConnection, AsyncCommands, Client};
use serde_json::{json, Value};

use tb_core::errors::DomainError;
use tb_core::services::broadcast::Broadcaster;
use tb_shared::config::BroadcastConfig;

use crate::InfrastructureError;

/// Redis pub/sub broadcaster
#[derive(Clone)]
pub struct RedisBroadcaster {
    connection: MultiplexedConnection,
    channel_prefix: String,
}

impl RedisBroadcaster {
    /// Connect to Redis and create a broadcaster.
    ///
    /// # Arguments
    /// * `config` - Broadcast configuration settings
    ///
    /// # Returns
    /// * `Result<Self, InfrastructureError>` - Broadcaster or connection error
    pub async fn new(config: &BroadcastConfig) -> Result<Self, InfrastructureError> {
        tracing::info!("Connecting to Redis for broadcast at {}", config.url);

        let client = Client::open(config.url.as_str())?;
        let connection = client.get_multiplexed_async_connection().await?;

        Ok(Self {
            connection,
            channel_prefix: config.channel_prefix.clone(),
        })
    }

    async fn publish(&self, channel: String, event: &str, payload: Value) -> Result<(), DomainError> {
        let message = json!({ "event": event, "payload": payload }).to_string();

        let mut connection = self.connection.clone();
        connection
            .publish::<_, _, ()>(channel, message)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Redis publish failed: {}", e),
            })
    }
}

#[async_trait]
impl Broadcaster for RedisBroadcaster {
    async fn publish_to(
        &self,
        user_id: &str,
        event: &str,
        payload: Value,
    ) -> Result<(), DomainError> {
        self.publish(user_channel(&self.channel_prefix, user_id), event, payload)
            .await
    }

    async fn publish_all(&self, event: &str, payload: Value) -> Result<(), DomainError> {
        self.publish(global_channel(&self.channel_prefix), event, payload)
            .await
    }
}

/// Channel for one identity's targeted events
fn user_channel(prefix: &str, user_id: &str) -> String {
    format!("{}:user:{}", prefix, user_id)
}

/// Channel shared by every connected client
fn global_channel(prefix: &str) -> String {
    format!("{}:broadcast", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_naming() {
        // Channel layout is the contract with the websocket gateway
        assert_eq!(user_channel("taskboard", "bob"), "taskboard:user:bob");
        assert_eq!(global_channel("taskboard"), "taskboard:broadcast");
    }
}
