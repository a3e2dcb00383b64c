pub mod address;
pub mod blocks;
pub mod error;
pub mod limit_query;
pub mod pools;
pub mod response;
pub mod tokens;
pub mod whales;
