//! Results of successful authentication flows.

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::User;

/// Outcome of a registration or login: the user plus a fresh token pair
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub tokens: TokenPair,
}

/// Outcome of a refresh-token exchange: the subject plus a rotated pair
#[derive(Debug, Clone)]
pub struct RefreshedSession {
    pub user_id: String,
    pub tokens: TokenPair,
}
