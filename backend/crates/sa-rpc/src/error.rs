use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors returned by the blockchain RPC gateway
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("RPC endpoint returned HTTP {status} {location}")]
    Status { status: u16, location: ErrorLocation },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("RPC error {code}: {message} {location}")]
    Rpc {
        code: i64,
        message: String,
        location: ErrorLocation,
    },

    #[error("RPC response for {method} had no result {location}")]
    MissingResult {
        method: String,
        location: ErrorLocation,
    },

    #[error("Invalid address '{address}': {reason} {location}")]
    InvalidAddress {
        address: String,
        reason: String,
        location: ErrorLocation,
    },
}

impl RpcError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        RpcError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        RpcError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// JSON-RPC error object returned by the node
    #[track_caller]
    pub fn rpc(code: i64, message: impl Into<String>) -> Self {
        RpcError::Rpc {
            code,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_address(address: &str, reason: impl Into<String>) -> Self {
        RpcError::InvalidAddress {
            address: address.to_string(),
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Error code reported by the RPC node, if this is a JSON-RPC error object
    pub fn rpc_code(&self) -> Option<i64> {
        match self {
            RpcError::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RpcError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        RpcError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for RpcError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        RpcError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, RpcError>;
