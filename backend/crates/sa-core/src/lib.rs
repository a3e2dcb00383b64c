pub mod error;
pub mod models;
pub mod query_service;

pub use error::{QueryError, Result as QueryResult};
pub use models::{BlockInfo, PoolInfo, TokenInfo, WhaleTransaction};
pub use query_service::QueryService;
