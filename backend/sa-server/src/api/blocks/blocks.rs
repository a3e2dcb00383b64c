use crate::{ApiError, ApiResponse, ApiResult, LimitQuery, RecentBlocksResponse};

use sa_core::BlockInfo;
use sa_ws::AppState;

use axum::extract::{Path, Query, State};

pub const DEFAULT_RECENT_BLOCKS_LIMIT: usize = 10;
pub const MAX_RECENT_BLOCKS_LIMIT: usize = 50;
pub const PLACEHOLDER_BLOCKHASH: &str = "placeholder";

/// GET /api/blocks/recent?limit=
pub async fn recent_blocks(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> ApiResult<ApiResponse<RecentBlocksResponse>> {
    let limit = query.resolve(DEFAULT_RECENT_BLOCKS_LIMIT);
    if limit > MAX_RECENT_BLOCKS_LIMIT {
        return Err(ApiError::bad_request(format!(
            "Limit cannot exceed {} blocks",
            MAX_RECENT_BLOCKS_LIMIT
        )));
    }

    let blocks = state
        .query
        .recent_blocks(limit)
        .await
        .map_err(|e| ApiError::upstream(e, state.mode))?;

    Ok(ApiResponse::ok(RecentBlocksResponse::from(blocks)))
}

/// GET /api/blocks/{slot}
///
/// Returns a placeholder record; only the slot is echoed back.
pub async fn get_block(Path(slot): Path<String>) -> ApiResult<ApiResponse<BlockInfo>> {
    let slot: u64 = slot
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid slot number"))?;

    Ok(ApiResponse::ok(BlockInfo {
        slot,
        blockhash: PLACEHOLDER_BLOCKHASH.to_string(),
        block_time: sa_ws::now_millis(),
        transaction_count: 0,
    }))
}
