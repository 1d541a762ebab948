//! Outgoing form payloads for add/update and submission endpoints.
//!
//! DESIGN
//! ======
//! Add and update share one upstream endpoint per record type; the server
//! tells them apart by whether an id field is present. [`SaveRequest::with_id`]
//! is the single place that decision is made.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use serde_json::{Map, Value};

use crate::entities::RecordId;

/// How the body is sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    /// `application/json` flat object.
    Json,
    /// `multipart/form-data`, used whenever a file may be attached.
    Multipart,
}

/// Ordered name/value pairs for one save call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveRequest {
    pub encoding: Encoding,
    pub fields: Vec<(String, String)>,
}

impl SaveRequest {
    pub fn new<I, K, V>(encoding: Encoding, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self { encoding, fields: fields.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    /// Append `field = id` when editing an existing record; no-op otherwise.
    #[must_use]
    pub fn with_id(mut self, field: &str, id: Option<&RecordId>) -> Self {
        if let Some(id) = id {
            self.fields.push((field.to_owned(), id.as_str().to_owned()));
        }
        self
    }

    /// Drop pairs whose value is empty or whitespace.
    #[must_use]
    pub fn without_empty(mut self) -> Self {
        self.fields.retain(|(_, v)| !v.trim().is_empty());
        self
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Flat JSON object body; later duplicates win.
    #[must_use]
    pub fn json_body(&self) -> Value {
        let mut map = Map::new();
        for (k, v) in &self.fields {
            map.insert(k.clone(), Value::String(v.clone()));
        }
        Value::Object(map)
    }
}
