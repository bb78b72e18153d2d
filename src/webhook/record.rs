use axum::http::HeaderMap;
use serde_json::{Map, Value};

use super::body::{BodyKind, DecodedBody};

/// Value of the `source` field on every webhook record.
pub const SOURCE: &str = "bettervoice";

/// Header name to value, in the order the request carried them.
pub type HeaderFields = Map<String, Value>;

/// Everything logged about one delivery.
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookLogRecord {
    pub source: &'static str,
    pub client_ip: Option<String>,
    pub headers: HeaderFields,
    pub body_type: BodyKind,
    pub body: String,
}

impl WebhookLogRecord {
    pub fn new(client_ip: Option<String>, headers: HeaderFields, body: &DecodedBody) -> Self {
        Self {
            source: SOURCE,
            client_ip,
            headers,
            body_type: body.kind(),
            body: body.to_log_string(),
        }
    }

    /// Headers as one JSON object string. Tracing field values are flat, so
    /// JSON log lines carry this as a string, not a nested object.
    pub fn headers_json(&self) -> String {
        serde_json::to_string(&self.headers).unwrap_or_else(|_| format!("{:?}", self.headers))
    }
}

/// Flattens a `HeaderMap` into name/value strings. A repeated name keeps its
/// last value. Values are read as latin-1, so every byte maps to one char.
pub fn collect_headers(headers: &HeaderMap) -> HeaderFields {
    let mut fields = HeaderFields::new();
    for (name, value) in headers {
        let value: String = value.as_bytes().iter().map(|&b| char::from(b)).collect();
        fields.insert(name.as_str().to_string(), Value::String(value));
    }
    fields
}
