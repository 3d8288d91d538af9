//! Business services containing domain logic and use cases.

pub mod auth;
pub mod broadcast;
pub mod tasks;
pub mod token;

// Re-export commonly used types
pub use auth::AuthService;
pub use broadcast::Broadcaster;
pub use tasks::{SideEffect, TaskCreated, TaskService, TaskUpdated};
pub use token::{TokenCleanupConfig, TokenCleanupService, TokenService, TokenServiceConfig};
