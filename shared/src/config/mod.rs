//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing and token lifetime configuration
//! - `broadcast` - Redis pub/sub configuration for real-time fan-out
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `server` - HTTP server configuration

pub mod auth;
pub mod broadcast;
pub mod database;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::JwtConfig;
pub use broadcast::BroadcastConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment the process runs in
    pub environment: Environment,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// JWT configuration
    pub auth: JwtConfig,

    /// Real-time broadcast configuration
    pub broadcast: BroadcastConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables.
    ///
    /// Returns an error message naming the missing variable when a required
    /// value (the JWT secret, the database URL) is absent. Callers treat
    /// this as fatal at startup.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env()?,
            auth: JwtConfig::from_env()?,
            broadcast: BroadcastConfig::from_env(),
        })
    }
}
