use crate::{ConfigError, ConfigErrorResult, DEFAULT_CORS_ORIGIN};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// The single browser origin allowed to call the API with credentials
    pub origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origin: String::from(DEFAULT_CORS_ORIGIN),
        }
    }
}

impl CorsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.origin.trim().is_empty() {
            return Err(ConfigError::config("cors.origin cannot be empty"));
        }

        // Credentialed CORS cannot use a wildcard origin.
        if self.origin.trim() == "*" {
            return Err(ConfigError::config(
                "cors.origin must name a concrete origin, '*' is not allowed with credentials",
            ));
        }

        Ok(())
    }
}
