use crate::client_ip::client_ip;

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use log::info;

/// Access log line per request: method, path, status, duration, client IP
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let ip = client_ip(&request);
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        "{} {} {} {}ms ip={}",
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_millis(),
        ip
    );

    response
}
