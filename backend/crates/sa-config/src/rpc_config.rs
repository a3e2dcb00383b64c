use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_RPC_TIMEOUT_SECS, DEFAULT_RPC_URL,
    MAX_RPC_TIMEOUT_SECS, MIN_RPC_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Upstream blockchain JSON-RPC endpoint settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RpcConfig {
    pub url: String,
    /// Transport timeout for a single RPC call
    pub timeout_secs: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_RPC_URL),
            timeout_secs: DEFAULT_RPC_TIMEOUT_SECS,
        }
    }
}

impl RpcConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::rpc(format!(
                "rpc.url must be an http:// or https:// URL, got '{}'",
                self.url
            )));
        }

        if self.timeout_secs < MIN_RPC_TIMEOUT_SECS || self.timeout_secs > MAX_RPC_TIMEOUT_SECS {
            return Err(ConfigError::rpc(format!(
                "rpc.timeout_secs must be {}-{}, got {}",
                MIN_RPC_TIMEOUT_SECS, MAX_RPC_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
