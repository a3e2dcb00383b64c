pub mod api;
pub mod client_ip;
pub mod error;
pub mod health;
pub mod logger;
pub mod rate_limit;
pub mod request_logging;
pub mod routes;
pub mod security_headers;

#[cfg(test)]
mod tests;

pub use api::{
    address::validate_address,
    blocks::{
        blocks::{get_block, recent_blocks},
        recent_blocks_response::RecentBlocksResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    limit_query::LimitQuery,
    pools::{
        pool_list_response::PoolListResponse,
        pools::{get_pool, list_pools},
    },
    response::ApiResponse,
    tokens::{
        token_holders_response::TokenHoldersResponse,
        tokens::{get_token, get_token_holders},
    },
    whales::{
        address_transactions_response::AddressTransactionsResponse,
        balance_response::BalanceResponse,
        whale_feed_response::WhaleFeedResponse,
        whales::{get_address_transactions, get_balance, list_whale_transactions},
    },
};
pub use error::{Result as ServerErrorResult, ServerError};
pub use rate_limit::{IpRateLimiter, RateLimitLayers};
pub use routes::{build_router, build_router_with_limits};
