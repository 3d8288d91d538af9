//! # Infrastructure Layer
//!
//! Concrete implementations of the core crate's persistence and broadcast
//! seams, following the same clean-architecture split as the rest of the
//! workspace:
//!
//! - **Database**: MySQL implementations of the repository traits using SQLx
//! - **Broadcast**: Redis pub/sub implementation of the `Broadcaster` trait

pub mod broadcast;
pub mod database;

use thiserror::Error;

/// Errors raised while constructing or operating infrastructure services
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Broadcast error: {0}")]
    Broadcast(#[from] redis::RedisError),
}
