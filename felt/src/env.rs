//! Deployment environment detection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Origin fragment identifying the production deployment.
pub const PRODUCTION_HOST: &str = "zkpoker.app";

/// The deployment the front-end is running in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Detect the environment from the page origin.
    ///
    /// No origin (not running in a browser) is treated as development, as is
    /// a development build on any origin.
    pub fn detect(origin: Option<&str>, dev_build: bool) -> Self {
        let Some(origin) = origin else {
            return Environment::Development;
        };
        if dev_build || origin.contains("localhost") || origin.contains("127.0.0") {
            Environment::Development
        } else if origin.contains(PRODUCTION_HOST) {
            Environment::Production
        } else {
            Environment::Staging
        }
    }

    pub fn is_dev(&self) -> bool {
        *self == Environment::Development
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            _ => Err(ConfigError::UnknownEnvironment(s.to_string())),
        }
    }
}

/// One value per environment.
///
/// ```
/// use felt::env::{EnvMap, Environment};
///
/// let api = EnvMap::new("http://localhost:4943", "https://staging.api", "https://api");
/// assert_eq!(*api.select(Environment::Production), "https://api");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvMap<T> {
    pub development: T,
    pub staging: T,
    pub production: T,
}

impl<T> EnvMap<T> {
    pub fn new(development: T, staging: T, production: T) -> Self {
        Self {
            development,
            staging,
            production,
        }
    }

    /// The value for `environment`.
    pub fn select(&self, environment: Environment) -> &T {
        match environment {
            Environment::Development => &self.development,
            Environment::Staging => &self.staging,
            Environment::Production => &self.production,
        }
    }
}
