use super::*;

use std::time::Duration;

use axum::Router;
use axum::http::{HeaderValue, StatusCode};
use serde_json::{Value, json};

use crate::config::SiteConfig;

fn test_config(upstream: &str, max_upload_bytes: usize) -> SiteConfig {
    SiteConfig {
        port: 0,
        api_upstream_url: upstream.to_owned(),
        request_timeout: Duration::from_secs(5),
        connect_timeout: Duration::from_secs(1),
        max_upload_bytes,
        static_dir: "public".into(),
    }
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Upstream stand-in that echoes what it received.
async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    let seen = json!({
        "method": method.as_str(),
        "uri": uri.to_string(),
        "authorization": headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()),
        "x_internal": headers.get("x-internal").and_then(|v| v.to_str().ok()),
        "body": String::from_utf8_lossy(&body),
    });
    let mut response = (StatusCode::CREATED, axum::Json(seen)).into_response();
    let out = response.headers_mut();
    out.insert(header::SET_COOKIE, HeaderValue::from_static("sid=abc; Path=/"));
    out.insert("x-upstream-debug", HeaderValue::from_static("1"));
    response
}

async fn proxy_for(upstream: &str, max_upload_bytes: usize) -> String {
    let state = AppState::new(test_config(upstream, max_upload_bytes)).unwrap();
    serve(crate::routes::api_routes(state)).await
}

// =============================================================================
// URL + header helpers
// =============================================================================

#[test]
fn upstream_url_keeps_path_and_query() {
    let uri: Uri = "/api/news/delete_news?id=12".parse().unwrap();
    assert_eq!(upstream_url("http://api.test", &uri), "http://api.test/api/news/delete_news?id=12");
}

#[test]
fn filter_headers_keeps_only_whitelist() {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::HOST, HeaderValue::from_static("site.test"));
    headers.insert("x-internal", HeaderValue::from_static("1"));

    let kept = filter_headers(&headers, &FORWARDED_REQUEST_HEADERS);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept.get(header::CONTENT_TYPE).unwrap(), "application/json");
}

// =============================================================================
// End to end
// =============================================================================

#[tokio::test]
async fn forwards_request_and_relays_response() {
    let upstream = serve(Router::new().fallback(echo)).await;
    let proxy = proxy_for(&upstream, 1024).await;

    let response = reqwest::Client::new()
        .post(format!("{proxy}/api/teams/add_or_update_team?dry=1"))
        .header(header::AUTHORIZATION, "Bearer t")
        .header("x-internal", "leak")
        .header(header::CONTENT_TYPE, "application/json")
        .body(r#"{"team_name":"Elite"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers().get(header::SET_COOKIE).unwrap(), "sid=abc; Path=/");
    assert!(response.headers().get("x-upstream-debug").is_none());

    let seen: Value = response.json().await.unwrap();
    assert_eq!(seen["method"], "POST");
    assert_eq!(seen["uri"], "/api/teams/add_or_update_team?dry=1");
    assert_eq!(seen["authorization"], "Bearer t");
    assert_eq!(seen["x_internal"], Value::Null);
    assert_eq!(seen["body"], r#"{"team_name":"Elite"}"#);
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway_with_error_envelope() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let proxy = proxy_for(&dead, 1024).await;

    let response = reqwest::get(format!("{proxy}/api/sports/get_sports")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().starts_with("upstream request failed"));
}

#[tokio::test]
async fn oversize_body_is_rejected_before_forwarding() {
    let upstream = serve(Router::new().fallback(echo)).await;
    let proxy = proxy_for(&upstream, 16).await;

    let response = reqwest::Client::new()
        .post(format!("{proxy}/api/athletes/add_or_update_athlete"))
        .body(vec![b'x'; 64])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "request body exceeds 16 bytes");
}

#[tokio::test]
async fn healthz_is_ok() {
    let proxy = proxy_for("http://127.0.0.1:9", 16).await;
    let response = reqwest::get(format!("{proxy}/healthz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
