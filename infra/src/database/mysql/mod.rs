//! MySQL repository implementations

mod notification_repository_impl;
mod task_repository_impl;
mod token_repository_impl;
mod user_repository_impl;

pub use notification_repository_impl::MySqlNotificationRepository;
pub use task_repository_impl::MySqlTaskRepository;
pub use token_repository_impl::MySqlTokenRepository;
pub use user_repository_impl::MySqlUserRepository;
