use axum::body::Bytes;
use serde_json::Value;
use std::fmt::Display;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Json,
    Text,
    Bytes,
}

impl BodyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyKind::Json => "json",
            BodyKind::Text => "text",
            BodyKind::Bytes => "bytes",
        }
    }
}

impl Display for BodyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A webhook payload after format detection.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedBody {
    Json(Value),
    Text(String),
    Bytes(Bytes),
}

impl DecodedBody {
    /// Tries JSON, then UTF-8 text, and keeps the raw bytes when both fail.
    pub fn decode(raw: Bytes) -> Self {
        if let Ok(value) = serde_json::from_slice::<Value>(raw.strip_prefix(UTF8_BOM).unwrap_or(&raw[..])) {
            return DecodedBody::Json(value);
        }

        match std::str::from_utf8(&raw) {
            Ok(text) => DecodedBody::Text(text.to_owned()),
            Err(_) => DecodedBody::Bytes(raw),
        }
    }

    pub fn kind(&self) -> BodyKind {
        match self {
            DecodedBody::Json(_) => BodyKind::Json,
            DecodedBody::Text(_) => BodyKind::Text,
            DecodedBody::Bytes(_) => BodyKind::Bytes,
        }
    }

    /// JSON rendering used in the log record. Raw bytes are stringified first,
    /// and non-ASCII text is kept as is.
    pub fn to_log_string(&self) -> String {
        let serialized = match self {
            DecodedBody::Json(value) => serde_json::to_string(value),
            DecodedBody::Text(text) => serde_json::to_string(text),
            DecodedBody::Bytes(bytes) => serde_json::to_string(&escape_bytes(bytes)),
        };
        serialized.unwrap_or_else(|_| self.to_string())
    }
}

impl Display for DecodedBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodedBody::Json(value) => write!(f, "{}", value),
            DecodedBody::Text(text) => f.write_str(text),
            DecodedBody::Bytes(bytes) => f.write_str(&escape_bytes(bytes)),
        }
    }
}

/// `b"..."` form with printable ASCII kept and everything else as `\xNN`.
fn escape_bytes(bytes: &[u8]) -> String {
    format!("b\"{}\"", bytes.escape_ascii())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_object() {
        let decoded = DecodedBody::decode(Bytes::from_static(br#"{"event":"call.completed","id":42}"#));
        assert_eq!(decoded.kind(), BodyKind::Json);
        assert_eq!(decoded, DecodedBody::Json(json!({"event": "call.completed", "id": 42})));
        assert_eq!(decoded.to_log_string(), r#"{"event":"call.completed","id":42}"#);
    }

    #[test]
    fn test_json_scalars_and_arrays() {
        for (raw, expected) in [
            ("[1,2,3]", json!([1, 2, 3])),
            ("\"hi\"", json!("hi")),
            ("3.5", json!(3.5)),
            ("true", json!(true)),
            ("null", Value::Null),
        ] {
            let decoded = DecodedBody::decode(Bytes::from(raw));
            assert_eq!(decoded, DecodedBody::Json(expected), "input: {}", raw);
        }
    }

    #[test]
    fn test_json_key_order_is_preserved() {
        let raw = r#"{"z":1,"a":{"y":2,"b":3}}"#;
        let decoded = DecodedBody::decode(Bytes::from(raw));
        assert_eq!(decoded.to_log_string(), raw);
    }

    #[test]
    fn test_json_big_integer_is_kept_exactly() {
        let raw = r#"{"call_id":123456789012345678901234567890}"#;
        let decoded = DecodedBody::decode(Bytes::from(raw));
        assert_eq!(decoded.kind(), BodyKind::Json);
        assert_eq!(decoded.to_log_string(), raw);
    }

    #[test]
    fn test_json_out_of_range_float_is_kept_exactly() {
        let decoded = DecodedBody::decode(Bytes::from("[1e400,-0.1000000000000000000001]"));
        assert_eq!(decoded.kind(), BodyKind::Json);
        assert_eq!(decoded.to_log_string(), "[1e400,-0.1000000000000000000001]");
    }

    #[test]
    fn test_json_with_bom() {
        let decoded = DecodedBody::decode(Bytes::from_static(b"\xEF\xBB\xBF{\"id\":1}"));
        assert_eq!(decoded, DecodedBody::Json(json!({"id": 1})));
    }

    #[test]
    fn test_plain_text() {
        let decoded = DecodedBody::decode(Bytes::from("hello world"));
        assert_eq!(decoded.kind(), BodyKind::Text);
        assert_eq!(decoded, DecodedBody::Text("hello world".to_string()));
        assert_eq!(decoded.to_log_string(), "\"hello world\"");
    }

    #[test]
    fn test_truncated_json_is_text() {
        let decoded = DecodedBody::decode(Bytes::from("{\"event\":"));
        assert_eq!(decoded, DecodedBody::Text("{\"event\":".to_string()));
    }

    #[test]
    fn test_non_ascii_text_is_not_escaped() {
        let decoded = DecodedBody::decode(Bytes::from("通话结束 ✓"));
        assert_eq!(decoded.kind(), BodyKind::Text);
        assert_eq!(decoded.to_log_string(), "\"通话结束 ✓\"");
    }

    #[test]
    fn test_empty_body_is_empty_text() {
        let decoded = DecodedBody::decode(Bytes::new());
        assert_eq!(decoded, DecodedBody::Text(String::new()));
        assert_eq!(decoded.to_log_string(), "\"\"");
    }

    #[test]
    fn test_invalid_utf8_is_bytes() {
        let raw = Bytes::from_static(&[0xFF, 0xFE, 0x00, 0x01]);
        let decoded = DecodedBody::decode(raw.clone());
        assert_eq!(decoded.kind(), BodyKind::Bytes);
        assert_eq!(decoded, DecodedBody::Bytes(raw));
        assert_eq!(decoded.to_string(), r#"b"\xff\xfe\x00\x01""#);
        assert_eq!(decoded.to_log_string(), r#""b\"\\xff\\xfe\\x00\\x01\"""#);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(BodyKind::Json.to_string(), "json");
        assert_eq!(BodyKind::Text.to_string(), "text");
        assert_eq!(BodyKind::Bytes.to_string(), "bytes");
    }
}
