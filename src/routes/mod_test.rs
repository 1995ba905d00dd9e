use super::test_support::{get, test_app};
use super::*;
use crate::config::AppConfig;

#[test]
fn query_param_returns_first_decoded_value() {
    let q = Some("url=https%3A%2F%2Fa.example%2Fx&url=https%3A%2F%2Fb.example");
    assert_eq!(query_param(q, "url").as_deref(), Some("https://a.example/x"));
    assert_eq!(query_param(q, "u"), None);
    assert_eq!(query_param(None, "url"), None);
}

#[test]
fn first_param_skips_empty_aliases() {
    let q = Some("url=&u=&link=https%3A%2F%2Fc.example");
    assert_eq!(first_param(q, &["url", "u", "link"]).as_deref(), Some("https://c.example"));
    assert_eq!(first_param(Some("url=&u="), &["url", "u", "link"]), None);
}

#[test]
fn first_param_prefers_earlier_alias() {
    let q = Some("link=https%3A%2F%2Flink.example&u=https%3A%2F%2Fu.example");
    assert_eq!(first_param(q, &["url", "u", "link"]).as_deref(), Some("https://u.example"));
}

#[tokio::test]
async fn healthz_returns_ok() {
    let res = get(test_app(AppConfig::default()), "/healthz").await;
    assert_eq!(res.status, StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let res = get(test_app(AppConfig::default()), "/api/nope").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}
