//! REST API error types
//!
//! Every variant renders as the standard failure envelope with its own
//! HTTP status.

use crate::ApiResponse;

use sa_config::RuntimeMode;
use sa_core::QueryError;

use std::panic::Location;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
pub const RATE_LIMITED_MESSAGE: &str = "Too many requests, please try again later.";
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Route not found";

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid client input (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// RPC failure (500). `details` is only set in development mode.
    #[error("Upstream error: {message} {location}")]
    Upstream {
        message: String,
        details: Option<String>,
        location: ErrorLocation,
    },

    /// Client exceeded a rate limit (429)
    #[error("Rate limit exceeded {location}")]
    RateLimited { location: ErrorLocation },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wrap a query failure. The upstream message only reaches the client in
    /// development mode.
    #[track_caller]
    pub fn upstream(err: QueryError, mode: RuntimeMode) -> Self {
        let message = err.upstream_message().to_string();
        ApiError::Upstream {
            details: mode.is_development().then(|| message.clone()),
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rate_limited() -> Self {
        ApiError::RateLimited {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if matches!(self, ApiError::Upstream { .. }) {
            log::error!("{}", self);
        }

        let body = match self {
            ApiError::Upstream { details, .. } => {
                ApiResponse::failure(INTERNAL_ERROR_MESSAGE, details)
            }
            ApiError::BadRequest { message, .. } | ApiError::NotFound { message, .. } => {
                ApiResponse::failure(message, None)
            }
            ApiError::RateLimited { .. } => ApiResponse::failure(RATE_LIMITED_MESSAGE, None),
        };

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
