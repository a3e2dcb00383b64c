use crate::ApiError;
use crate::api::error::{INTERNAL_ERROR_MESSAGE, RATE_LIMITED_MESSAGE};

use sa_config::RuntimeMode;
use sa_core::QueryError;
use sa_rpc::RpcError;

use axum::{http::StatusCode, response::IntoResponse};
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

fn query_error() -> QueryError {
    QueryError::from(RpcError::rpc(-32603, "node is behind"))
}

#[tokio::test]
async fn test_bad_request_returns_400_with_message() {
    let (status, json) = body_json(ApiError::bad_request("Invalid token address")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Invalid token address");
    assert!(json.get("details").is_none());
    assert!(json.get("data").is_none());
    assert!(json["timestamp"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_not_found_returns_404_with_message() {
    let (status, json) = body_json(ApiError::not_found("Token not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Token not found");
}

#[tokio::test]
async fn test_upstream_in_development_exposes_details() {
    let (status, json) =
        body_json(ApiError::upstream(query_error(), RuntimeMode::Development)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], INTERNAL_ERROR_MESSAGE);
    assert!(
        json["details"]
            .as_str()
            .unwrap()
            .contains("node is behind")
    );
}

#[tokio::test]
async fn test_upstream_in_production_hides_details() {
    let (status, json) =
        body_json(ApiError::upstream(query_error(), RuntimeMode::Production)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], INTERNAL_ERROR_MESSAGE);
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn test_rate_limited_returns_429() {
    let (status, json) = body_json(ApiError::rate_limited()).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], RATE_LIMITED_MESSAGE);
}
