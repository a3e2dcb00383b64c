/// Configuration for WebSocket connections
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Outbound queue size per connection (bounded to handle backpressure)
    pub send_buffer_size: usize,
}

impl ConnectionConfig {
    pub fn from_config(config: &sa_config::WebSocketConfig) -> Self {
        Self {
            send_buffer_size: config.send_buffer_size,
        }
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            send_buffer_size: sa_config::DEFAULT_SEND_BUFFER_SIZE,
        }
    }
}
