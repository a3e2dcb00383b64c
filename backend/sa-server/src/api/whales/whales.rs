use crate::{
    AddressTransactionsResponse, ApiError, ApiResponse, ApiResult, BalanceResponse, LimitQuery,
    WhaleFeedResponse, validate_address,
};

use sa_ws::AppState;

use axum::extract::{Path, Query, State};
use log::debug;

pub const DEFAULT_ADDRESS_TRANSACTIONS_LIMIT: usize = 10;
pub const DEFAULT_WHALE_FEED_LIMIT: usize = 20;

/// GET /api/whales/address/{address}?limit=
pub async fn get_address_transactions(
    State(state): State<AppState>,
    Path(address): Path<String>,
    Query(query): Query<LimitQuery>,
) -> ApiResult<ApiResponse<AddressTransactionsResponse>> {
    validate_address(&address, "wallet")?;
    let limit = query.resolve(DEFAULT_ADDRESS_TRANSACTIONS_LIMIT);

    let transactions = state
        .query
        .transactions_for_address(&address, limit)
        .await
        .map_err(|e| ApiError::upstream(e, state.mode))?;

    Ok(ApiResponse::ok(AddressTransactionsResponse::new(
        address,
        transactions,
    )))
}

/// GET /api/whales/transactions?limit=
pub async fn list_whale_transactions(
    Query(query): Query<LimitQuery>,
) -> ApiResult<ApiResponse<WhaleFeedResponse>> {
    let limit = query.resolve(DEFAULT_WHALE_FEED_LIMIT);
    debug!("Whale feed requested (limit {})", limit);

    Ok(ApiResponse::ok(WhaleFeedResponse::default()))
}

/// GET /api/whales/balance/{address}
pub async fn get_balance(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> ApiResult<ApiResponse<BalanceResponse>> {
    validate_address(&address, "wallet")?;

    let sol = state
        .query
        .balance(&address)
        .await
        .map_err(|e| ApiError::upstream(e, state.mode))?;

    Ok(ApiResponse::ok(BalanceResponse::new(address, sol)))
}
