use crate::{
    ApiResponse, RateLimitLayers, ServerError, ServerErrorResult,
    api::error::ROUTE_NOT_FOUND_MESSAGE, get_address_transactions, get_balance, get_block,
    get_pool, get_token, get_token_holders, health, list_pools, list_whale_transactions,
    rate_limit, recent_blocks, request_logging, security_headers,
};

use sa_config::Config;
use sa_ws::AppState;

use axum::{
    Router,
    http::{HeaderValue, Method, StatusCode, header},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::cors::CorsLayer;

/// Build the application router with all endpoints.
///
/// Layers, outermost first: security headers, CORS, request logging.
/// Rate limits apply to data routes only, so health, `/ws` and unknown
/// paths are never throttled.
pub fn build_router(state: AppState, config: &Config) -> ServerErrorResult<Router> {
    let limits = RateLimitLayers::from_config(&config.rate_limit)?;
    build_router_with_limits(state, config, limits)
}

/// Same as [`build_router`] but with caller-owned limiters, so the caller can
/// prune their per-IP state
pub fn build_router_with_limits(
    state: AppState,
    config: &Config,
    limits: RateLimitLayers,
) -> ServerErrorResult<Router> {
    let data_routes = Router::new()
        // Tokens
        .route("/api/tokens/{address}", get(get_token))
        .route("/api/tokens/{address}/holders", get(get_token_holders))
        // Pools
        .route("/api/pools", get(list_pools))
        .route("/api/pools/{address}", get(get_pool))
        // Whales
        .route(
            "/api/whales/address/{address}",
            get(get_address_transactions),
        )
        .route("/api/whales/transactions", get(list_whale_transactions))
        .route("/api/whales/balance/{address}", get(get_balance))
        // Blocks
        .route("/api/blocks/recent", get(recent_blocks))
        .route("/api/blocks/{slot}", get(get_block))
        .route_layer(middleware::from_fn_with_state(
            limits.strict,
            rate_limit::enforce,
        ))
        .route_layer(middleware::from_fn_with_state(
            limits.api,
            rate_limit::enforce,
        ));

    let router = Router::new()
        // WebSocket endpoint
        .route("/ws", get(sa_ws::handler))
        // Health check
        .route("/api/health", get(health::health_check))
        .merge(data_routes)
        .fallback(not_found)
        .with_state(state)
        .layer(middleware::from_fn(request_logging::log_request))
        .layer(cors_layer(&config.cors.origin)?);

    Ok(security_headers::apply(router))
}

fn cors_layer(origin: &str) -> ServerErrorResult<CorsLayer> {
    let origin = HeaderValue::from_str(origin).map_err(|_| ServerError::CorsOrigin {
        origin: origin.to_string(),
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        ApiResponse::failure(ROUTE_NOT_FOUND_MESSAGE, None),
    )
        .into_response()
}
