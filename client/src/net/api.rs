//! REST API helpers for the athletics API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a network error, since every page
//! fetches after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every call goes through `wire::decode`, so callers see exactly one of a
//! typed payload or an `ApiError`. Failures are logged here once and then
//! rendered by the calling view; nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use wire::endpoints::{
    GET_ATHLETES, GET_ATHLETES_OF_WEEK, GET_EVENTS, GET_HIGHLIGHTS, GET_NEWS, GET_SHOP, GET_SPORTS, GET_TEAMS,
    SUBMIT_RECRUITMENT,
};
use wire::{
    ApiError, Athlete, Endpoint, Event, Highlight, LoginRequest, NewsItem, RecordId, SaveRequest, SessionUser,
    ShopProduct, SignupRequest, Sport, Team, WeekAthlete, WeekSelectionRequest,
};

use crate::state::recruit::ATTACHMENT_FIELD;

/// A file chosen in a browser file input.
#[cfg(feature = "hydrate")]
pub type Upload = web_sys::File;

/// A file chosen in a browser file input. Never constructed during server
/// render.
#[cfg(not(feature = "hydrate"))]
#[derive(Clone, Debug)]
pub struct Upload;

#[cfg(any(test, not(feature = "hydrate")))]
const SERVER_RENDER: &str = "not available on server";

#[cfg(any(test, not(feature = "hydrate")))]
fn server_render_error() -> ApiError {
    ApiError::Network(SERVER_RENDER.to_owned())
}

#[cfg(any(test, feature = "hydrate"))]
fn transport_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn failure_log_line(endpoint: &Endpoint, url: &str, err: &ApiError) -> String {
    format!("{} {url} failed: {err}", endpoint.method.as_str())
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
enum Body {
    Empty,
    Json(serde_json::Value),
    Form(web_sys::FormData),
}

#[cfg(feature = "hydrate")]
fn http_method(method: wire::Method) -> gloo_net::http::Method {
    match method {
        wire::Method::Get => gloo_net::http::Method::GET,
        wire::Method::Post => gloo_net::http::Method::POST,
        wire::Method::Delete => gloo_net::http::Method::DELETE,
    }
}

#[cfg(feature = "hydrate")]
async fn call<T: DeserializeOwned>(endpoint: &Endpoint, url: &str, body: Body) -> Result<T, ApiError> {
    let result = async {
        let builder = gloo_net::http::RequestBuilder::new(url)
            .method(http_method(endpoint.method))
            .header("Accept", "application/json");
        let request = match body {
            Body::Empty => builder.build(),
            Body::Json(value) => builder.json(&value),
            Body::Form(form) => builder.body(form),
        }
        .map_err(transport_error)?;
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;
        wire::decode::<T>(endpoint, status, &text)
    }
    .await;
    if let Err(err) = &result {
        log::warn!("{}", failure_log_line(endpoint, url, err));
    }
    result
}

/// Build a multipart body from text pairs plus optional files.
#[cfg(feature = "hydrate")]
fn form_data(request: &SaveRequest, files: &[(&str, Upload)]) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Network("FormData unavailable".to_owned()))?;
    for (name, value) in &request.fields {
        form.append_with_str(name, value).map_err(|_| ApiError::Network(format!("cannot append {name}")))?;
    }
    for (name, file) in files {
        form.append_with_blob_and_filename(name, file, &file.name())
            .map_err(|_| ApiError::Network(format!("cannot attach {name}")))?;
    }
    Ok(form)
}

/// GET a list endpoint.
///
/// # Errors
///
/// Any transport, status, or envelope failure.
pub async fn list<T: DeserializeOwned>(endpoint: &Endpoint) -> Result<Vec<T>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        call(endpoint, endpoint.path, Body::Empty).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
        Err(server_render_error())
    }
}

/// POST an add-or-update body. JSON requests ignore `files`.
///
/// # Errors
///
/// Any transport, status, or envelope failure.
pub async fn save(endpoint: &Endpoint, request: &SaveRequest, files: Vec<(&'static str, Upload)>) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = match request.encoding {
            wire::Encoding::Json => Body::Json(request.json_body()),
            wire::Encoding::Multipart => Body::Form(form_data(request, &files)?),
        };
        call(endpoint, endpoint.path, body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, request, files);
        Err(server_render_error())
    }
}

/// DELETE one record by id.
///
/// # Errors
///
/// Any transport, status, or envelope failure.
pub async fn delete(endpoint: &Endpoint, id: &RecordId) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint.with_id(id);
        call(endpoint, &url, Body::Empty).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, id);
        Err(server_render_error())
    }
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, T: DeserializeOwned>(endpoint: &Endpoint, body: &B) -> Result<T, ApiError> {
    let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    call(endpoint, endpoint.path, Body::Json(value)).await
}

// =============================================================================
// ENDPOINTS
// =============================================================================

pub async fn get_sports() -> Result<Vec<Sport>, ApiError> {
    list(&GET_SPORTS).await
}

pub async fn get_athletes() -> Result<Vec<Athlete>, ApiError> {
    list(&GET_ATHLETES).await
}

pub async fn get_athletes_of_week() -> Result<Vec<WeekAthlete>, ApiError> {
    list(&GET_ATHLETES_OF_WEEK).await
}

pub async fn get_events() -> Result<Vec<Event>, ApiError> {
    list(&GET_EVENTS).await
}

pub async fn get_news() -> Result<Vec<NewsItem>, ApiError> {
    list(&GET_NEWS).await
}

pub async fn get_highlights() -> Result<Vec<Highlight>, ApiError> {
    list(&GET_HIGHLIGHTS).await
}

pub async fn get_teams() -> Result<Vec<Team>, ApiError> {
    list(&GET_TEAMS).await
}

pub async fn get_shop() -> Result<Vec<ShopProduct>, ApiError> {
    list(&GET_SHOP).await
}

/// Replace the featured pair.
///
/// # Errors
///
/// Any transport, status, or envelope failure.
pub async fn set_athletes_of_week(request: &WeekSelectionRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&wire::endpoints::SET_ATHLETES_OF_WEEK, request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(server_render_error())
    }
}

/// Send a recruitment application with its optional attachment.
///
/// # Errors
///
/// Any transport, status, or envelope failure.
pub async fn submit_recruitment(request: &SaveRequest, attachment: Option<Upload>) -> Result<(), ApiError> {
    let files = attachment.map(|file| (ATTACHMENT_FIELD, file)).into_iter().collect();
    save(&SUBMIT_RECRUITMENT, request, files).await
}

/// Exchange credentials for the user object to keep in the session.
///
/// # Errors
///
/// [`ApiError::Application`] carries the server's reason for a rejected
/// login.
pub async fn login(request: &LoginRequest) -> Result<SessionUser, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&wire::endpoints::LOGIN, request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(server_render_error())
    }
}

/// Create an account. The caller then asks the user to log in.
///
/// # Errors
///
/// Any transport, status, or envelope failure.
pub async fn signup(request: &SignupRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json::<_, serde_json::Value>(&wire::endpoints::SIGNUP, request).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(server_render_error())
    }
}
