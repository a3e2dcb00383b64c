use std::time::Duration;

/// Configuration for the periodic block broadcast
#[derive(Debug, Clone)]
pub struct BroadcastConfig {
    /// Time between ticks; the first tick fires one full interval after start
    pub interval: Duration,
}

impl BroadcastConfig {
    pub fn from_config(config: &sa_config::WebSocketConfig) -> Self {
        Self {
            interval: Duration::from_millis(config.broadcast_interval_ms),
        }
    }
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(sa_config::DEFAULT_BROADCAST_INTERVAL_MS),
        }
    }
}
