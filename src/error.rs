//! Proxy failures and their HTTP rendering.
//!
//! The body mirrors the athletics API's own failure envelope so the browser
//! adapter reports a proxy fault the same way as an upstream one.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },

    #[error("upstream request failed: {0}")]
    Upstream(String),

    #[error("upstream response unreadable: {0}")]
    UpstreamBody(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Upstream(_) | Self::UpstreamBody(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "status": "error", "message": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}
