//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Access token expiration time (15 minutes)
pub const ACCESS_TOKEN_TTL_MINUTES: i64 = 15;

/// Refresh token expiration time (30 days)
pub const REFRESH_TOKEN_TTL_DAYS: i64 = 30;

/// Number of random bytes in a refresh token value (hex-encoded on the wire)
pub const REFRESH_TOKEN_BYTES: usize = 48;

/// Claims structure for the JWT payload.
///
/// Deliberately minimal: the subject id plus the two timestamps. An access
/// token proves identity for its lifetime and nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for an access token with the given lifetime
    pub fn new_access_token(user_id: &str, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(ttl_minutes);

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Refresh token record persisted in the credential store.
///
/// The token value itself is the lookup key; rotation and revocation delete
/// the record, so a value that matches a stored row is by definition active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// The opaque token value (hex-encoded random bytes), unique
    pub token: String,

    /// User ID this token belongs to
    pub user_id: String,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Creates a new refresh token record with the given lifetime
    pub fn new(user_id: &str, token: String, ttl_days: i64) -> Self {
        let now = Utc::now();

        Self {
            token,
            user_id: user_id.to_string(),
            created_at: now,
            expires_at: now + Duration::days(ttl_days),
        }
    }

    /// Checks if the refresh token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// A freshly issued refresh token value together with its expiry,
/// as handed back to the transport layer for cookie issuance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedRefreshToken {
    /// The opaque token value
    pub token: String,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,
}

/// Access/refresh token pair produced by a successful authentication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed JWT access token
    pub access_token: String,

    /// Opaque refresh token value
    pub refresh_token: String,

    /// Expiry of the refresh token
    pub refresh_expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_claims() {
        let claims = Claims::new_access_token("user-1", ACCESS_TOKEN_TTL_MINUTES);

        assert_eq!(claims.sub, "user-1");
        assert!(!claims.is_expired());
        assert_eq!(claims.exp - claims.iat, ACCESS_TOKEN_TTL_MINUTES * 60);
    }

    #[test]
    fn test_claims_expiration() {
        let mut claims = Claims::new_access_token("user-1", ACCESS_TOKEN_TTL_MINUTES);

        // Move expiration into the past
        claims.exp = Utc::now().timestamp() - 1;

        assert!(claims.is_expired());
    }

    #[test]
    fn test_refresh_token_creation() {
        let token = RefreshToken::new("user-1", "aabbcc".to_string(), REFRESH_TOKEN_TTL_DAYS);

        assert_eq!(token.user_id, "user-1");
        assert_eq!(token.token, "aabbcc");
        assert!(!token.is_expired());
    }

    #[test]
    fn test_refresh_token_expiration() {
        let mut token = RefreshToken::new("user-1", "aabbcc".to_string(), REFRESH_TOKEN_TTL_DAYS);

        token.expires_at = Utc::now() - Duration::days(1);

        assert!(token.is_expired());
    }

    #[test]
    fn test_claims_serialization() {
        let claims = Claims::new_access_token("user-1", ACCESS_TOKEN_TTL_MINUTES);

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }
}
