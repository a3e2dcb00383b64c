use thiserror::Error;

/// Startup failures of the server binary
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to create log directory {path}: {source}")]
    LogDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Invalid rate limit quota: {message}")]
    RateLimit { message: String },

    #[error("Invalid CORS origin '{origin}'")]
    CorsOrigin { origin: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
