use crate::{ApiError, ApiResponse, ApiResult, PoolListResponse, validate_address};

use sa_core::PoolInfo;
use sa_ws::AppState;

use axum::extract::{Path, State};

/// GET /api/pools
pub async fn list_pools() -> ApiResult<ApiResponse<PoolListResponse>> {
    Ok(ApiResponse::ok(PoolListResponse::default()))
}

/// GET /api/pools/{address}
pub async fn get_pool(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> ApiResult<ApiResponse<PoolInfo>> {
    validate_address(&address, "pool")?;

    let pool = state
        .query
        .pool_info(&address)
        .await
        .map_err(|e| ApiError::upstream(e, state.mode))?;

    Ok(ApiResponse::ok(pool))
}
