use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Rate limit constraints
pub const MIN_RATE_LIMIT_REQUESTS: u32 = 1;
pub const MAX_RATE_LIMIT_REQUESTS: u32 = 10000;
pub const MIN_RATE_LIMIT_WINDOW_SECS: u64 = 1;
pub const MAX_RATE_LIMIT_WINDOW_SECS: u64 = 3600;

pub const DEFAULT_API_MAX_REQUESTS: u32 = 100;
pub const DEFAULT_API_WINDOW_SECS: u64 = 900;
pub const DEFAULT_STRICT_MAX_REQUESTS: u32 = 30;
pub const DEFAULT_STRICT_WINDOW_SECS: u64 = 60;

/// Per-client-IP rate limiting for the REST API.
///
/// `api_*` applies to every `/api` route except health, `strict_*` is layered
/// on top of it for the routes that reach the RPC endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub api_max_requests: u32,
    pub api_window_secs: u64,
    pub strict_max_requests: u32,
    pub strict_window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            api_max_requests: DEFAULT_API_MAX_REQUESTS,
            api_window_secs: DEFAULT_API_WINDOW_SECS,
            strict_max_requests: DEFAULT_STRICT_MAX_REQUESTS,
            strict_window_secs: DEFAULT_STRICT_WINDOW_SECS,
        }
    }
}

impl RateLimitConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::validate_pair("api", self.api_max_requests, self.api_window_secs)?;
        Self::validate_pair("strict", self.strict_max_requests, self.strict_window_secs)
    }

    fn validate_pair(name: &str, max_requests: u32, window_secs: u64) -> ConfigErrorResult<()> {
        if !(MIN_RATE_LIMIT_REQUESTS..=MAX_RATE_LIMIT_REQUESTS).contains(&max_requests) {
            return Err(ConfigError::config(format!(
                "rate_limit.{}_max_requests must be {}-{}, got {}",
                name, MIN_RATE_LIMIT_REQUESTS, MAX_RATE_LIMIT_REQUESTS, max_requests
            )));
        }

        if !(MIN_RATE_LIMIT_WINDOW_SECS..=MAX_RATE_LIMIT_WINDOW_SECS).contains(&window_secs) {
            return Err(ConfigError::config(format!(
                "rate_limit.{}_window_secs must be {}-{}, got {}",
                name, MIN_RATE_LIMIT_WINDOW_SECS, MAX_RATE_LIMIT_WINDOW_SECS, window_secs
            )));
        }

        Ok(())
    }
}
