//! Reverse proxy for the athletics REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser calls the API at same-origin `/api/...` paths. Each request is
//! replayed against `API_UPSTREAM_URL` with the same method, path, query, and
//! body, and the upstream response is relayed back. Only a fixed set of
//! headers crosses in either direction. Nothing is retried or cached.

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::error::ProxyError;
use crate::state::AppState;

/// Request headers forwarded upstream.
pub const FORWARDED_REQUEST_HEADERS: [HeaderName; 4] =
    [header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION, header::COOKIE];

/// Response headers relayed to the browser.
pub const RELAYED_RESPONSE_HEADERS: [HeaderName; 2] = [header::CONTENT_TYPE, header::SET_COOKIE];

/// Upstream URL for an incoming request: base plus the incoming path and
/// query.
pub fn upstream_url(base: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{base}{path_and_query}")
}

/// Copy the whitelisted headers in `names` from `from`.
pub fn filter_headers(from: &HeaderMap, names: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in names {
        for value in from.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Body,
) -> Result<Response, ProxyError> {
    let limit = state.config.max_upload_bytes;
    let body: Bytes = axum::body::to_bytes(body, limit).await.map_err(|_| ProxyError::BodyTooLarge { limit })?;
    let url = upstream_url(&state.config.api_upstream_url, &uri);

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(filter_headers(&headers, &FORWARDED_REQUEST_HEADERS))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "upstream request failed");
            ProxyError::Upstream(e.to_string())
        })?;

    let status = upstream.status();
    let relayed = filter_headers(upstream.headers(), &RELAYED_RESPONSE_HEADERS);
    let bytes = upstream.bytes().await.map_err(|e| {
        tracing::warn!(%method, %url, error = %e, "upstream body read failed");
        ProxyError::UpstreamBody(e.to_string())
    })?;

    if status.is_server_error() {
        tracing::warn!(%method, %url, status = status.as_u16(), "upstream returned server error");
    } else {
        tracing::debug!(%method, %url, status = status.as_u16(), "proxied");
    }

    Ok((status, relayed, bytes).into_response())
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
