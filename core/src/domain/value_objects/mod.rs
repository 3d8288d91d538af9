//! Value objects shared between services and the transport layer.

pub mod auth_session;

pub use auth_session::{AuthSession, RefreshedSession};
