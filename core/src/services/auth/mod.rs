//! Authentication and session flows
//!
//! Registration, login, refresh-token exchange, and logout, built on the
//! user repository and the token service.

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
