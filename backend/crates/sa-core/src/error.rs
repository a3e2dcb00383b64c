use std::panic::Location;

use error_location::ErrorLocation;
use sa_rpc::RpcError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Upstream RPC failure: {message} {location}")]
    Upstream {
        message: String,
        location: ErrorLocation,
        #[source]
        source: RpcError,
    },
}

impl QueryError {
    /// Message of the underlying failure, without location
    pub fn upstream_message(&self) -> &str {
        match self {
            QueryError::Upstream { message, .. } => message,
        }
    }
}

impl From<RpcError> for QueryError {
    #[track_caller]
    fn from(source: RpcError) -> Self {
        QueryError::Upstream {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;
