// tests/net.rs
use std::time::Duration;

use nt_shop::config::options::FetchOptions;
use nt_shop::core::net;
use nt_shop::error::FetchError;
use nt_shop::shop::{fetch_bootstrap, HttpSource};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COOKIE: &str = "ntuser=abc; session=xyz";

fn opts(origin: String) -> FetchOptions {
    FetchOptions {
        origin,
        cookie: Some(COOKIE.to_string()),
        timeout: Duration::from_secs(5),
        ..FetchOptions::default()
    }
}

// The blocking client owns its own runtime; keep it off the test runtime.
async fn get(opts: FetchOptions, url: String) -> nt_shop::error::Result<serde_json::Value> {
    tokio::task::spawn_blocking(move || {
        let client = net::build_client(&opts)?;
        net::get_json(&client, &url)
    })
    .await
    .unwrap()
}

#[tokio::test]
async fn sends_cookie_and_accept_and_parses_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/bootstrap"))
        .and(header("cookie", COOKIE))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "shop": [ { "name": "A" } ] })))
        .expect(1)
        .mount(&server)
        .await;

    let o = opts(server.uri());
    let url = o.url_for("/api/v2/bootstrap");
    let v = get(o, url).await.unwrap();
    assert_eq!(v, json!({ "shop": [ { "name": "A" } ] }));
}

#[tokio::test]
async fn non_success_status_is_reported_with_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/bootstrap"))
        .respond_with(ResponseTemplate::new(403).set_body_string("{}"))
        .mount(&server)
        .await;

    let o = opts(server.uri());
    let err = get(o.clone(), o.url_for("/api/bootstrap")).await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 403, .. }), "{err}");

    // unmatched path: wiremock answers 404
    let err = get(o.clone(), o.url_for("/api/")).await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 404, .. }), "{err}");
}

#[tokio::test]
async fn html_body_is_a_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<!DOCTYPE html><html>login</html>"))
        .mount(&server)
        .await;

    let o = opts(server.uri());
    let err = get(o.clone(), o.url_for("/api/v2/")).await.unwrap_err();
    assert!(matches!(err, FetchError::Json(_)), "{err}");
}

#[tokio::test]
async fn http_source_walks_candidates_until_one_answers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/bootstrap"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/bootstrap"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/"))
        .and(header("cookie", COOKIE))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "bootstrap": { "daily": [] } })))
        .mount(&server)
        .await;

    let o = opts(format!("{}/", server.uri()));
    let fetched = tokio::task::spawn_blocking(move || {
        let endpoints = o.endpoints.clone();
        let src = HttpSource::new(o).unwrap();
        fetch_bootstrap(&src, &endpoints, None)
    })
    .await
    .unwrap();

    assert_eq!(fetched.source_path.as_deref(), Some("/api/v2/"));
    assert_eq!(fetched.payload, Some(json!({ "bootstrap": { "daily": [] } })));
}

#[test]
fn cookie_with_newline_is_rejected_up_front() {
    let mut o = FetchOptions::default();
    o.cookie = Some("a=b\nX-Evil: 1".to_string());
    let err = net::build_client(&o).unwrap_err();
    assert!(matches!(err, FetchError::Header(_)), "{err}");
}
