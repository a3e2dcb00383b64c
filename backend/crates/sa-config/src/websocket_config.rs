use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Send buffer size constraints
pub const MIN_SEND_BUFFER_SIZE: usize = 1;
pub const MAX_SEND_BUFFER_SIZE: usize = 10000;
pub const DEFAULT_SEND_BUFFER_SIZE: usize = 100;

// Broadcast interval constraints (milliseconds)
pub const MIN_BROADCAST_INTERVAL_MS: u64 = 10;
pub const MAX_BROADCAST_INTERVAL_MS: u64 = 3_600_000;
pub const DEFAULT_BROADCAST_INTERVAL_MS: u64 = 10_000;

/// Realtime channel settings.
/// All values validated to be within reasonable operational ranges.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebSocketConfig {
    /// Outbound queue depth per connection
    pub send_buffer_size: usize,
    /// Period of the block snapshot broadcast
    pub broadcast_interval_ms: u64,
}

impl Default for WebSocketConfig {
    fn default() -> Self {
        Self {
            send_buffer_size: DEFAULT_SEND_BUFFER_SIZE,
            broadcast_interval_ms: DEFAULT_BROADCAST_INTERVAL_MS,
        }
    }
}

impl WebSocketConfig {
    /// Validate all fields are within acceptable ranges.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.send_buffer_size < MIN_SEND_BUFFER_SIZE
            || self.send_buffer_size > MAX_SEND_BUFFER_SIZE
        {
            return Err(ConfigError::config(format!(
                "websocket.send_buffer_size must be {}-{}, got {}",
                MIN_SEND_BUFFER_SIZE, MAX_SEND_BUFFER_SIZE, self.send_buffer_size
            )));
        }

        if self.broadcast_interval_ms < MIN_BROADCAST_INTERVAL_MS
            || self.broadcast_interval_ms > MAX_BROADCAST_INTERVAL_MS
        {
            return Err(ConfigError::config(format!(
                "websocket.broadcast_interval_ms must be {}-{}, got {}",
                MIN_BROADCAST_INTERVAL_MS, MAX_BROADCAST_INTERVAL_MS, self.broadcast_interval_ms
            )));
        }

        Ok(())
    }
}
