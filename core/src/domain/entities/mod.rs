//! Domain entities representing core business objects.

pub mod notification;
pub mod task;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use notification::Notification;
pub use task::{NewTask, Task, TaskPatch, TaskPriority, TaskStatus};
pub use token::{
    Claims, IssuedRefreshToken, RefreshToken, TokenPair, ACCESS_TOKEN_TTL_MINUTES,
    REFRESH_TOKEN_BYTES, REFRESH_TOKEN_TTL_DAYS,
};
pub use user::User;
