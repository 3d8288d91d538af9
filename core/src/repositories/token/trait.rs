//! Token repository trait defining the interface for refresh token persistence.

use async_trait::async_trait;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository contract for refresh token records.
///
/// Records are keyed by the token value itself, which must be unique.
/// Rotation and revocation are deletions: a value with no matching row is
/// not an active token, full stop.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Persist a new refresh token record.
    ///
    /// # Arguments
    /// * `token` - The record to persist
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The saved record
    /// * `Err(DomainError)` - Save failed; a duplicate token value is an error
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Look up a refresh token by its value.
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - Record found
    /// * `Ok(None)` - No record with this value
    async fn find_refresh_token(&self, token: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Delete a refresh token by its value.
    ///
    /// # Returns
    /// * `Ok(true)` - A record was deleted
    /// * `Ok(false)` - No record with this value existed
    async fn delete_refresh_token(&self, token: &str) -> Result<bool, DomainError>;

    /// Delete a refresh token scoped to its owner.
    ///
    /// Rotation uses this: the boolean result is the arbiter when two
    /// rotations race over the same value, only one caller observes `true`.
    async fn delete_user_refresh_token(
        &self,
        token: &str,
        user_id: &str,
    ) -> Result<bool, DomainError>;

    /// Delete every expired record.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records deleted
    async fn delete_expired_tokens(&self) -> Result<usize, DomainError>;
}
