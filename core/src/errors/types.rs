//! Domain-specific error types for authentication and token management.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown email and wrong password collapse into this one variant so
    /// the API cannot be used as an account-existence oracle.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("User already exists")]
    UserAlreadyExists,
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    /// Every access-token verification failure (bad signature, expired,
    /// malformed) maps here; callers are not told which it was.
    #[error("Invalid or expired access token")]
    InvalidAccessToken,

    /// Unknown, expired, rotated, or revoked refresh token
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,

    /// Signing secret absent at construction; fatal process misconfiguration
    #[error("Signing secret is not configured")]
    MissingSecret,
}
