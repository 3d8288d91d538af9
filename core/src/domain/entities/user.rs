//! User entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user.
///
/// The password hash never leaves the process: it is skipped on
/// serialization and the API layer exposes its own user DTO anyway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,

    /// Unique login email
    pub email: String,

    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Display name
    pub name: String,

    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with a generated id
    pub fn new(email: &str, password_hash: String, name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            password_hash,
            name: name.to_string(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User::new("alice@example.com", "$2b$10$hash".to_string(), "Alice");
        let value = serde_json::to_value(&user).unwrap();

        assert!(value.get("passwordHash").is_none());
        assert_eq!(value["email"], "alice@example.com");
    }
}
