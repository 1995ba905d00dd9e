use super::*;
use crate::config::AppConfig;
use crate::routes::test_support::{encode, get, post_json, test_app};
use axum::http::StatusCode;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SUMMIT_HTML: &str = "<html><head><title>Water Summit 2026 | Tickets</title></head><body>\
    <h1>Water Summit</h1>\
    <p>12 March 2026 ... 14 March 2026</p>\
    <p>Online only</p>\
    </body></html>";

async fn upstream_with(status: u16, html: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/event"))
        .respond_with(ResponseTemplate::new(status).set_body_string(html))
        .mount(&server)
        .await;
    server
}

#[test]
fn body_target_prefers_url_then_u_then_link() {
    let body = IngestBody { url: None, u: Some("https://u.example".into()), link: Some("https://l.example".into()) };
    assert_eq!(body.target(), Some("https://u.example"));

    let body = IngestBody { url: Some(String::new()), u: None, link: Some("https://l.example".into()) };
    assert_eq!(body.target(), Some("https://l.example"));

    assert_eq!(IngestBody::default().target(), None);
}

#[tokio::test]
async fn get_returns_record_for_event_page() {
    let server = upstream_with(200, SUMMIT_HTML).await;
    let uri = format!("/api/events/ingest?url={}", encode(&format!("{}/event", server.uri())));

    let res = get(test_app(AppConfig::default()), &uri).await;
    assert_eq!(res.status, StatusCode::OK);

    let json = res.json();
    assert_eq!(json["slug"], "water-summit");
    assert_eq!(json["splash_page_path"], "/events/water-summit");
    assert_eq!(json["fields"]["upcoming_dates"], "2026-03-12--2026-03-14");
    assert_eq!(json["fields"]["upcoming_location"], "");
    assert_eq!(json["fields"]["event_website"], server.uri());
    assert!(json["frontmatter"].as_str().unwrap().starts_with("---\n"));
}

#[tokio::test]
async fn get_accepts_link_alias() {
    let server = upstream_with(200, SUMMIT_HTML).await;
    let uri = format!("/api/events/ingest?link={}", encode(&format!("{}/event", server.uri())));

    let res = get(test_app(AppConfig::default()), &uri).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["slug"], "water-summit");
}

#[tokio::test]
async fn missing_url_is_bad_request() {
    let res = get(test_app(AppConfig::default()), "/api/events/ingest").await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json(), serde_json::json!({ "error": "Missing url" }));
}

#[tokio::test]
async fn upstream_404_is_bad_gateway() {
    let server = upstream_with(404, "gone").await;
    let uri = format!("/api/events/ingest?url={}", encode(&format!("{}/event", server.uri())));

    let res = get(test_app(AppConfig::default()), &uri).await;
    assert_eq!(res.status, StatusCode::BAD_GATEWAY);
    assert_eq!(res.json(), serde_json::json!({ "error": "Fetch failed 404" }));
}

#[tokio::test]
async fn relative_url_is_bad_request() {
    let res = get(test_app(AppConfig::default()), "/api/events/ingest?url=%2Fevents%2Fx").await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.json()["error"].as_str().unwrap().starts_with("Invalid url"));
}

#[tokio::test]
async fn post_uses_json_body() {
    let server = upstream_with(200, SUMMIT_HTML).await;
    let body = serde_json::json!({ "u": format!("{}/event", server.uri()) }).to_string();

    let res = post_json(test_app(AppConfig::default()), "/api/events/ingest", body).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["fields"]["event_name"], "Water Summit");
}

#[tokio::test]
async fn post_without_target_is_bad_request() {
    let res = post_json(test_app(AppConfig::default()), "/api/events/ingest", "{}").await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json(), serde_json::json!({ "error": "Missing url" }));
}

#[tokio::test]
async fn post_with_malformed_json_is_internal_error() {
    let res = post_json(test_app(AppConfig::default()), "/api/events/ingest", "not json").await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(res.json()["error"].as_str().is_some_and(|m| !m.is_empty()));
}
