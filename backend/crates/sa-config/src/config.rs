use crate::{
    CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    CorsConfig, LoggingConfig, RateLimitConfig, RpcConfig, ServerConfig, WebSocketConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub rpc: RpcConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
    pub websocket: WebSocketConfig,
    pub rate_limit: RateLimitConfig,
}

impl Config {
    /// Load config from file and environment.
    ///
    /// Loading order:
    /// 1. Load `.env` from the working directory if present
    /// 2. Check for SA_CONFIG_DIR env var, else use ./.sa/
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply SA_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let _ = dotenvy::dotenv();

        let config_path = Self::config_dir()?.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SA_CONFIG_DIR env var > ./.sa/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.rpc.validate()?;
        self.cors.validate()?;
        self.websocket.validate()?;
        self.rate_limit.validate()?;

        if let Some(ref file) = self.logging.file
            && (Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::config(
                "logging.file must be a relative file name and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let log_dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(log_dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max {} connections, {} mode)",
            self.server.host, self.server.port, self.server.max_connections, self.server.mode
        );
        info!("  rpc: {} (timeout {}s)", self.rpc.url, self.rpc.timeout_secs);
        info!("  cors: {}", self.cors.origin);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  websocket: buffer={}, broadcast every {}ms",
            self.websocket.send_buffer_size, self.websocket.broadcast_interval_ms
        );
        info!(
            "  rate_limit: api {}/{}s, strict {}/{}s",
            self.rate_limit.api_max_requests,
            self.rate_limit.api_window_secs,
            self.rate_limit.strict_max_requests,
            self.rate_limit.strict_window_secs
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("SA_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("SA_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "SA_SERVER_MAX_CONNECTIONS",
            &mut self.server.max_connections,
        );
        Self::apply_env_parse("SA_MODE", &mut self.server.mode);

        // RPC
        Self::apply_env_string("SA_RPC_URL", &mut self.rpc.url);
        Self::apply_env_parse("SA_RPC_TIMEOUT_SECS", &mut self.rpc.timeout_secs);

        // CORS
        Self::apply_env_string("SA_CORS_ORIGIN", &mut self.cors.origin);

        // Logging
        Self::apply_env_parse("SA_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SA_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SA_LOG_FILE", &mut self.logging.file);

        // WebSocket
        Self::apply_env_parse(
            "SA_WS_SEND_BUFFER_SIZE",
            &mut self.websocket.send_buffer_size,
        );
        Self::apply_env_parse(
            "SA_WS_BROADCAST_INTERVAL_MS",
            &mut self.websocket.broadcast_interval_ms,
        );

        // Rate limit
        Self::apply_env_parse(
            "SA_RATE_LIMIT_API_MAX_REQUESTS",
            &mut self.rate_limit.api_max_requests,
        );
        Self::apply_env_parse(
            "SA_RATE_LIMIT_API_WINDOW_SECS",
            &mut self.rate_limit.api_window_secs,
        );
        Self::apply_env_parse(
            "SA_RATE_LIMIT_STRICT_MAX_REQUESTS",
            &mut self.rate_limit.strict_max_requests,
        );
        Self::apply_env_parse(
            "SA_RATE_LIMIT_STRICT_WINDOW_SECS",
            &mut self.rate_limit.strict_window_secs,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
