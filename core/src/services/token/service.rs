//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::domain::entities::token::{
    Claims, IssuedRefreshToken, RefreshToken, REFRESH_TOKEN_BYTES,
};
use crate::errors::{DomainError, TokenError};
use crate::repositories::TokenRepository;

use super::config::TokenServiceConfig;

/// Service for managing JWT access tokens and opaque refresh tokens
pub struct TokenService<R: TokenRepository> {
    pub(crate) repository: R,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<R: TokenRepository> TokenService<R> {
    /// Creates a new token service instance.
    ///
    /// # Arguments
    ///
    /// * `repository` - Refresh token repository for persistence
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or an error if no signing secret is configured.
    /// Callers should treat that error as fatal: a process without a secret
    /// cannot authenticate anything.
    pub fn new(repository: R, config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.jwt_secret.is_empty() {
            return Err(DomainError::Token(TokenError::MissingSecret));
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Ok(Self {
            repository,
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Issues a signed access token for the given subject.
    ///
    /// The payload carries only the subject id and the issue/expiry
    /// timestamps; the token is self-contained and never persisted.
    pub fn issue_access_token(&self, user_id: &str) -> Result<String, DomainError> {
        let claims = Claims::new_access_token(user_id, self.config.access_token_ttl_minutes);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies an access token's signature and expiry in one step.
    ///
    /// Every failure mode (bad signature, expired, malformed) collapses into
    /// `TokenError::InvalidAccessToken`. Callers are deliberately not told
    /// which check failed.
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| DomainError::Token(TokenError::InvalidAccessToken))
    }

    /// Issues and persists a new refresh token for the given subject.
    ///
    /// The value is 48 bytes from the OS CSPRNG, hex-encoded. The general
    /// PRNG is not acceptable here.
    pub async fn issue_refresh_token(
        &self,
        user_id: &str,
    ) -> Result<IssuedRefreshToken, DomainError> {
        let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        let value = hex::encode(bytes);

        let record = RefreshToken::new(user_id, value, self.config.refresh_token_ttl_days);
        let saved = self
            .repository
            .save_refresh_token(record)
            .await
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))?;

        Ok(IssuedRefreshToken {
            token: saved.token,
            expires_at: saved.expires_at,
        })
    }

    /// Rotates a refresh token: invalidates the old value, issues a new one.
    ///
    /// The delete is scoped to the subject and its result decides the race:
    /// when two rotations of the same value run concurrently, exactly one
    /// observes the deletion and proceeds; the other sees a value that no
    /// longer exists and fails as a replay.
    pub async fn rotate_refresh_token(
        &self,
        old_token: &str,
        user_id: &str,
    ) -> Result<IssuedRefreshToken, DomainError> {
        let removed = self
            .repository
            .delete_user_refresh_token(old_token, user_id)
            .await?;
        if !removed {
            return Err(DomainError::Token(TokenError::InvalidRefreshToken));
        }

        self.issue_refresh_token(user_id).await
    }

    /// Looks up a refresh token record by value. Pure lookup, no side effects.
    pub async fn find_refresh_token(
        &self,
        token: &str,
    ) -> Result<Option<RefreshToken>, DomainError> {
        self.repository.find_refresh_token(token).await
    }

    /// Verifies a refresh token and returns its subject.
    ///
    /// Unknown and expired values both come back as `InvalidRefreshToken`;
    /// an expired record is reaped on the way out so it can never match
    /// again.
    pub async fn verify_refresh_token(&self, token: &str) -> Result<String, DomainError> {
        let record = self
            .repository
            .find_refresh_token(token)
            .await?
            .ok_or(DomainError::Token(TokenError::InvalidRefreshToken))?;

        if record.is_expired() {
            let _ = self.repository.delete_refresh_token(token).await;
            return Err(DomainError::Token(TokenError::InvalidRefreshToken));
        }

        Ok(record.user_id)
    }

    /// Revokes a refresh token. Idempotent: revoking an unknown or
    /// already-revoked value is not an error.
    pub async fn revoke_refresh_token(&self, token: &str) -> Result<(), DomainError> {
        self.repository.delete_refresh_token(token).await?;
        Ok(())
    }

    /// Removes expired refresh tokens from storage.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of tokens cleaned up
    pub async fn delete_expired_tokens(&self) -> Result<usize, DomainError> {
        self.repository.delete_expired_tokens().await
    }
}
