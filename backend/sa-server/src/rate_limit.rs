//! Per-client-IP request throttling for the REST API

use crate::{ApiError, ServerError, ServerErrorResult, client_ip::client_ip};

use sa_config::RateLimitConfig;

use std::net::IpAddr;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use log::warn;

pub type IpRateLimiter = Arc<DefaultKeyedRateLimiter<IpAddr>>;

/// The two limiters applied to data routes
#[derive(Clone)]
pub struct RateLimitLayers {
    /// Every rate limited `/api` route
    pub api: IpRateLimiter,
    /// Routes that reach the RPC node
    pub strict: IpRateLimiter,
}

impl RateLimitLayers {
    pub fn from_config(config: &RateLimitConfig) -> ServerErrorResult<Self> {
        Ok(Self {
            api: keyed_limiter(config.api_max_requests, config.api_window_secs)?,
            strict: keyed_limiter(config.strict_max_requests, config.strict_window_secs)?,
        })
    }

    /// Drop per-IP state that has fully replenished
    pub fn retain_recent(&self) {
        self.api.retain_recent();
        self.strict.retain_recent();
    }
}

/// `max_requests` per `window_secs`, all of which may be spent at once.
/// The bucket refills one request every `window / max_requests`.
pub fn keyed_limiter(max_requests: u32, window_secs: u64) -> ServerErrorResult<IpRateLimiter> {
    let burst = NonZeroU32::new(max_requests).ok_or_else(|| ServerError::RateLimit {
        message: "max_requests must be at least 1".to_string(),
    })?;

    let period = Duration::from_secs(window_secs) / burst.get();
    let quota = Quota::with_period(period)
        .ok_or_else(|| ServerError::RateLimit {
            message: format!(
                "{} requests per {}s gives a zero replenish period",
                max_requests, window_secs
            ),
        })?
        .allow_burst(burst);

    Ok(Arc::new(RateLimiter::keyed(quota)))
}

/// Middleware rejecting requests once the caller's bucket is empty
pub async fn enforce(
    State(limiter): State<IpRateLimiter>,
    request: Request,
    next: Next,
) -> Response {
    let ip = client_ip(&request);

    if limiter.check_key(&ip).is_err() {
        warn!("Rate limit exceeded for {} on {}", ip, request.uri().path());
        return ApiError::rate_limited().into_response();
    }

    next.run(request).await
}
