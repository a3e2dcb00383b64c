mod config;
mod cors_config;
mod error;
mod log_level;
mod logging_config;
mod rate_limit_config;
mod rpc_config;
mod runtime_mode;
mod server_config;
mod websocket_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use cors_config::CorsConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rate_limit_config::{
    DEFAULT_API_MAX_REQUESTS, DEFAULT_API_WINDOW_SECS, DEFAULT_STRICT_MAX_REQUESTS,
    DEFAULT_STRICT_WINDOW_SECS, RateLimitConfig,
};
pub use rpc_config::RpcConfig;
pub use runtime_mode::RuntimeMode;
pub use server_config::ServerConfig;
pub use websocket_config::{
    DEFAULT_BROADCAST_INTERVAL_MS, DEFAULT_SEND_BUFFER_SIZE, WebSocketConfig,
};

const CONFIG_DIR_ENV: &str = "SA_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".sa";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const MIN_PORT: u16 = 1024;

const DEFAULT_MAX_CONNECTIONS: usize = 10_000;
const MIN_MAX_CONNECTIONS: usize = 1;
const MAX_MAX_CONNECTIONS: usize = 100_000;

const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
const DEFAULT_RPC_TIMEOUT_SECS: u64 = 30;
const MIN_RPC_TIMEOUT_SECS: u64 = 1;
const MAX_RPC_TIMEOUT_SECS: u64 = 300;

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
