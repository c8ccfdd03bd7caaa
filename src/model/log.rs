//! Log entity as handed over by the query layer

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::level::LogLevel;

/// Structured source fields keyed by name, iterated in key order
pub type SourceMap = BTreeMap<String, FieldValue>;

/// Source keys that duplicate fields the detail view already prints.
///
/// Must stay in sync with the explicit lines in `Decorator::render_details`.
pub const SUPPRESSED_SOURCE_KEYS: [&str; 8] = [
    "log-level",
    "message",
    "script-id",
    "@version",
    "@timestamp",
    "object",
    "type",
    "host",
];

/// Whether a source key is hidden from the generic field dump
#[must_use]
pub fn is_suppressed_key(key: &str) -> bool {
    SUPPRESSED_SOURCE_KEYS.contains(&key)
}

/// A single value from the source map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "serde_json::Value")]
pub enum FieldValue {
    /// Key present with no value
    Null,
    /// Text value
    String(String),
    /// Integer that fits in an `i64`
    Integer(i64),
    /// Integer above `i64::MAX`
    Unsigned(u64),
    /// Any other number
    Float(f64),
    /// Booleans, arrays and objects
    Other(serde_json::Value),
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Self::Unsigned(u)
                } else if let Some(f) = n.as_f64() {
                    Self::Float(f)
                } else {
                    Self::Other(serde_json::Value::Number(n))
                }
            }
            other => Self::Other(other),
        }
    }
}

impl From<FieldValue> for serde_json::Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Null => Self::Null,
            FieldValue::String(s) => Self::String(s),
            FieldValue::Integer(i) => Self::from(i),
            FieldValue::Unsigned(u) => Self::from(u),
            FieldValue::Float(f) => Self::from(f),
            FieldValue::Other(v) => v,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// One frame of an exception stack trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceFrame {
    /// Source file path
    pub file: String,
    /// Line number within the file
    pub line: u32,
}

/// Exception attached to a log record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exception {
    /// Exception message
    #[serde(default)]
    pub message: String,
    /// Numeric code; zero means no exception was raised
    #[serde(default)]
    pub code: i64,
    /// Stack frames, innermost first
    #[serde(default)]
    pub trace: Vec<TraceFrame>,
}

/// A structured log record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
    /// Backend identifier of the record
    pub id: String,
    /// Severity level
    pub level: LogLevel,
    /// When the record was written
    pub time: DateTime<Utc>,
    /// Host that produced the record
    #[serde(default)]
    pub host: String,
    /// Session the record belongs to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Message, possibly containing `:name` placeholders
    pub message: String,
    /// Identifier of the script that logged the record
    #[serde(default)]
    pub script_id: String,
    /// Opaque object value attached by the producer
    #[serde(default)]
    pub object: serde_json::Value,
    /// Arbitrary structured fields
    #[serde(default)]
    pub source: SourceMap,
    /// Exception raised alongside the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception: Option<Exception>,
}

impl Log {
    /// The session id, or `None` when absent or empty
    #[must_use]
    pub fn session(&self) -> Option<&str> {
        self.session_id.as_deref().filter(|s| !s.is_empty())
    }

    /// The exception, or `None` when absent or its code is zero
    #[must_use]
    pub fn raised_exception(&self) -> Option<&Exception> {
        self.exception.as_ref().filter(|e| e.code != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::make_test_log;
    use serde_json::json;

    #[test]
    fn test_field_value_from_json_variants() {
        assert_eq!(FieldValue::from(json!(null)), FieldValue::Null);
        assert_eq!(FieldValue::from(json!("a")), FieldValue::String("a".to_string()));
        assert_eq!(FieldValue::from(json!(7)), FieldValue::Integer(7));
        assert_eq!(FieldValue::from(json!(-7)), FieldValue::Integer(-7));
        assert_eq!(FieldValue::from(json!(4.5)), FieldValue::Float(4.5));
        assert_eq!(FieldValue::from(json!(true)), FieldValue::Other(json!(true)));
        assert_eq!(FieldValue::from(json!([1, 2])), FieldValue::Other(json!([1, 2])));
    }

    #[test]
    fn test_large_unsigned_keeps_exact_value() {
        let source: SourceMap =
            serde_json::from_str(r#"{"n": 18446744073709551615}"#).unwrap();
        assert_eq!(source["n"], FieldValue::Unsigned(u64::MAX));
        let value = FieldValue::from(json!(9_223_372_036_854_775_808_u64));
        assert_eq!(value, FieldValue::Unsigned(9_223_372_036_854_775_808));
    }

    #[test]
    fn test_whole_float_stays_float() {
        let source: SourceMap = serde_json::from_value(json!({"ratio": 4.0})).unwrap();
        assert_eq!(source["ratio"], FieldValue::Float(4.0));
    }

    #[test]
    fn test_suppressed_keys() {
        for key in SUPPRESSED_SOURCE_KEYS {
            assert!(is_suppressed_key(key));
        }
        assert!(!is_suppressed_key("user"));
        assert!(!is_suppressed_key("version"));
    }

    #[test]
    fn test_empty_session_is_none() {
        let mut log = make_test_log("a1", "hello");
        log.session_id = Some(String::new());
        assert_eq!(log.session(), None);
        log.session_id = Some("sess-9".to_string());
        assert_eq!(log.session(), Some("sess-9"));
    }

    #[test]
    fn test_zero_code_exception_is_not_raised() {
        let mut log = make_test_log("a1", "hello");
        log.exception = Some(Exception {
            message: "boom".to_string(),
            code: 0,
            trace: vec![],
        });
        assert!(log.raised_exception().is_none());
        log.exception.as_mut().unwrap().code = 500;
        assert_eq!(log.raised_exception().unwrap().message, "boom");
    }

    #[test]
    fn test_log_deserializes_with_optional_fields_missing() {
        let log: Log = serde_json::from_value(json!({
            "id": "x",
            "level": 200,
            "time": "2024-01-02T15:04:05Z",
            "message": "started"
        }))
        .unwrap();
        assert_eq!(log.id, "x");
        assert!(log.host.is_empty());
        assert!(log.source.is_empty());
        assert!(log.exception.is_none());
        assert_eq!(log.object, serde_json::Value::Null);
    }
}
