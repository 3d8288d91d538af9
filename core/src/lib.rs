//! # Taskboard Core
//!
//! Core business logic and domain layer for the Taskboard backend.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types that form the foundation of the
//! application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, Notification, RefreshToken, Task, TokenPair, User};
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use repositories::{NotificationRepository, TaskRepository, TokenRepository, UserRepository};
pub use services::{AuthService, Broadcaster, TaskService, TokenService};
