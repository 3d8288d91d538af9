//! Authentication service implementation

use std::sync::Arc;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::User;
use crate::domain::value_objects::{AuthSession, RefreshedSession};
use crate::errors::{AuthError, DomainError};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::token::TokenService;

/// Service for account registration and session management
pub struct AuthService<U: UserRepository, R: TokenRepository> {
    users: Arc<U>,
    tokens: Arc<TokenService<R>>,
}

impl<U: UserRepository, R: TokenRepository> AuthService<U, R> {
    /// Creates a new auth service
    pub fn new(users: Arc<U>, tokens: Arc<TokenService<R>>) -> Self {
        Self { users, tokens }
    }

    /// Registers a new account and opens a session.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthSession)` - The created user and a fresh token pair
    /// * `Err(AuthError::UserAlreadyExists)` - The email is taken
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AuthSession, DomainError> {
        if self.users.find_by_email(email).await?.is_some() {
            return Err(DomainError::Auth(AuthError::UserAlreadyExists));
        }

        let password_hash =
            bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| DomainError::Internal {
                message: format!("Password hashing failed: {}", e),
            })?;

        let user = self
            .users
            .create_user(User::new(email, password_hash, name))
            .await?;
        let tokens = self.open_session(&user.id).await?;

        Ok(AuthSession { user, tokens })
    }

    /// Verifies credentials and opens a session.
    ///
    /// Unknown email and wrong password both come back as
    /// `InvalidCredentials`.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, DomainError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(DomainError::Auth(AuthError::InvalidCredentials))?;

        let matches =
            bcrypt::verify(password, &user.password_hash).map_err(|e| DomainError::Internal {
                message: format!("Password verification failed: {}", e),
            })?;
        if !matches {
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        let tokens = self.open_session(&user.id).await?;
        Ok(AuthSession { user, tokens })
    }

    /// Exchanges a refresh token for a rotated pair.
    ///
    /// The presented value is consumed: a second exchange with the same
    /// value fails as a replay.
    pub async fn refresh_session(
        &self,
        refresh_token: &str,
    ) -> Result<RefreshedSession, DomainError> {
        let user_id = self.tokens.verify_refresh_token(refresh_token).await?;
        let rotated = self
            .tokens
            .rotate_refresh_token(refresh_token, &user_id)
            .await?;
        let access_token = self.tokens.issue_access_token(&user_id)?;

        Ok(RefreshedSession {
            user_id,
            tokens: TokenPair {
                access_token,
                refresh_token: rotated.token,
                refresh_expires_at: rotated.expires_at,
            },
        })
    }

    /// Ends a session by revoking its refresh token. Idempotent.
    pub async fn logout(&self, refresh_token: &str) -> Result<(), DomainError> {
        self.tokens.revoke_refresh_token(refresh_token).await
    }

    /// Loads the authenticated user's profile
    pub async fn current_user(&self, user_id: &str) -> Result<User, DomainError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))
    }

    async fn open_session(&self, user_id: &str) -> Result<TokenPair, DomainError> {
        let access_token = self.tokens.issue_access_token(user_id)?;
        let refresh = self.tokens.issue_refresh_token(user_id).await?;

        Ok(TokenPair {
            access_token,
            refresh_token: refresh.token,
            refresh_expires_at: refresh.expires_at,
        })
    }
}
