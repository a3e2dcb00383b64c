use crate::ApiResponse;

use sa_ws::AppState;

use axum::extract::State;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    /// Unix milliseconds
    pub timestamp: i64,
    /// Seconds since the server started
    pub uptime: f64,
}

/// GET /api/health - Liveness check, exempt from rate limiting
pub async fn health_check(State(state): State<AppState>) -> ApiResponse<HealthStatus> {
    ApiResponse::ok(HealthStatus {
        status: "healthy",
        timestamp: sa_ws::now_millis(),
        uptime: state.started_at.elapsed().as_secs_f64(),
    })
}
