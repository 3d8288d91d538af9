//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository contract for user records
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user.
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError)` - Write failed; the email column is unique
    async fn create_user(&self, user: User) -> Result<User, DomainError>;

    /// Look up a user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Look up a user by id
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError>;
}
