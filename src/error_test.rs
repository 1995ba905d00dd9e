use super::*;
use axum::body::to_bytes;

async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[test]
fn status_mapping() {
    assert_eq!(ApiError::Validation("x".into()).status(), StatusCode::BAD_REQUEST);
    assert_eq!(ApiError::UpstreamStatus(404).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ApiError::UpstreamTransport("refused".into()).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ApiError::Unexpected("boom".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn messages_match_wire_format() {
    assert_eq!(ApiError::Validation("Missing url".into()).to_string(), "Missing url");
    assert_eq!(ApiError::UpstreamStatus(404).to_string(), "Fetch failed 404");
    assert_eq!(ApiError::UpstreamTransport("timed out".into()).to_string(), "Fetch failed: timed out");
}

#[tokio::test]
async fn renders_json_error_body() {
    let (status, json) = body_json(ApiError::UpstreamStatus(503)).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json, serde_json::json!({ "error": "Fetch failed 503" }));
}

#[tokio::test]
async fn unexpected_error_reports_message_text() {
    let (status, json) = body_json(ApiError::Unexpected("expected value at line 1".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "expected value at line 1");
}
