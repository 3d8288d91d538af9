//! Authentication request/response DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use tb_core::domain::entities::user::User;

/// Request body for POST /api/auth/register
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}

/// Request body for POST /api/auth/login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a user
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}

/// Response body for register and login
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: UserResponse,
}

/// Response body for POST /api/auth/refresh
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
}
