//! Response envelope normalization.
//!
//! SYSTEM CONTEXT
//! ==============
//! The upstream API answers in three incompatible styles:
//!
//! - a bare JSON array (failures as `{ "error": "..." }`),
//! - `{ "status": "success", "<key>": ... }` (failures carry `message`),
//! - `{ "success": true, ... }` (failures carry `error`).
//!
//! [`normalize`] folds all of them into `Result<Value, ApiError>` so views
//! only ever see a payload or one error.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::endpoints::Endpoint;
use crate::error::ApiError;

/// Envelope style an endpoint answers with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Bare JSON array.
    List,
    /// `status`-flagged object with the payload under the given key.
    Status(&'static str),
    /// `status`-flagged acknowledgment with no payload.
    Ack,
    /// `success`-flagged object, payload under the key or the whole body.
    Success(Option<&'static str>),
}

const STATUS_SUCCESS: &str = "success";

/// Fold an HTTP status and raw body into the endpoint's payload.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for non-2xx answers, [`ApiError::Decode`] for
/// bodies that are not the promised JSON, and [`ApiError::Application`] when
/// the envelope's own flag reports failure.
pub fn normalize(shape: Shape, status: u16, body: &str) -> Result<Value, ApiError> {
    let ok = (200..300).contains(&status);
    let parsed = serde_json::from_str::<Value>(body);

    if !ok {
        // Login/signup report bad credentials with a 4xx and a readable body.
        if let (Shape::Success(_), Ok(value)) = (shape, &parsed) {
            if let Some(message) = failure_text(value, "error") {
                return Err(ApiError::Application(message));
            }
        }
        return Err(ApiError::Status(status));
    }

    let value = parsed.map_err(|e| ApiError::Decode(e.to_string()))?;
    match shape {
        Shape::List => unwrap_list(value),
        Shape::Status(key) => {
            check_status(&value)?;
            Ok(take_key(value, key))
        }
        Shape::Ack => {
            check_status(&value)?;
            Ok(Value::Null)
        }
        Shape::Success(key) => {
            if value.get("success").and_then(Value::as_bool) != Some(true) {
                let message = failure_text(&value, "error").unwrap_or_else(|| "Request failed".to_owned());
                return Err(ApiError::Application(message));
            }
            Ok(match key {
                Some(key) => take_key(value, key),
                None => value,
            })
        }
    }
}

/// Normalize and then deserialize the payload into `T`.
///
/// # Errors
///
/// Any error from [`normalize`], or [`ApiError::Decode`] when the payload
/// does not match `T`.
pub fn decode<T: DeserializeOwned>(endpoint: &Endpoint, status: u16, body: &str) -> Result<T, ApiError> {
    let payload = normalize(endpoint.shape, status, body)?;
    serde_json::from_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}

fn unwrap_list(value: Value) -> Result<Value, ApiError> {
    match value {
        Value::Array(_) => Ok(value),
        Value::Object(_) => {
            let message = failure_text(&value, "error")
                .or_else(|| failure_text(&value, "message"))
                .unwrap_or_else(|| "Unexpected response from the server".to_owned());
            Err(ApiError::Application(message))
        }
        other => Err(ApiError::Decode(format!("expected array, got {other}"))),
    }
}

fn check_status(value: &Value) -> Result<(), ApiError> {
    if value.get("status").and_then(Value::as_str) == Some(STATUS_SUCCESS) {
        return Ok(());
    }
    let message = failure_text(value, "message")
        .or_else(|| failure_text(value, "error"))
        .unwrap_or_else(|| "Request failed".to_owned());
    Err(ApiError::Application(message))
}

/// Payload under `key`; a missing or `null` key reads as an empty list.
fn take_key(mut value: Value, key: &str) -> Value {
    match value.get_mut(key).map(Value::take) {
        Some(Value::Null) | None => Value::Array(Vec::new()),
        Some(payload) => payload,
    }
}

fn failure_text(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}
