//! Request and response DTOs

pub mod auth;
pub mod task;

pub use auth::*;
pub use task::*;
