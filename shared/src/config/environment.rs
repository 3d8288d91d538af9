//! Environment detection

use serde::{Deserialize, Serialize};

/// Deployment environment the process runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl Environment {
    /// Read the environment from the `ENVIRONMENT` variable.
    ///
    /// Unknown or missing values fall back to `Development`.
    pub fn from_env() -> Self {
        match std::env::var("ENVIRONMENT").as_deref() {
            Ok("production") => Environment::Production,
            Ok("staging") => Environment::Staging,
            _ => Environment::Development,
        }
    }

    /// Whether cookies and transport security should use production settings
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_development() {
        assert_eq!(Environment::default(), Environment::Development);
        assert!(!Environment::default().is_production());
    }

    #[test]
    fn test_production_flag() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Staging.is_production());
    }
}
