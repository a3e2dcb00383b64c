use crate::{ApiError, ApiResponse, ApiResult, TokenHoldersResponse, validate_address};

use sa_core::TokenInfo;
use sa_ws::AppState;

use axum::extract::{Path, State};

pub const TOKEN_NOT_FOUND_MESSAGE: &str = "Token not found";

/// GET /api/tokens/{address}
pub async fn get_token(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> ApiResult<ApiResponse<TokenInfo>> {
    validate_address(&address, "token")?;

    let token = state
        .query
        .token_info(&address)
        .await
        .map_err(|e| ApiError::upstream(e, state.mode))?
        .ok_or_else(|| ApiError::not_found(TOKEN_NOT_FOUND_MESSAGE))?;

    Ok(ApiResponse::ok(token))
}

/// GET /api/tokens/{address}/holders
pub async fn get_token_holders(
    Path(address): Path<String>,
) -> ApiResult<ApiResponse<TokenHoldersResponse>> {
    validate_address(&address, "token")?;

    Ok(ApiResponse::ok(TokenHoldersResponse::default()))
}
