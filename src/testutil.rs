//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use chrono::{TimeZone, Utc};

use crate::model::{Log, Request, Severity, SourceMap};

/// Create a minimal INFO `Log` for testing with sensible defaults.
///
/// Time is fixed at `2024-01-02T15:04:05Z`, host is `web-1`, script id is
/// `cron.php`; session, object, source and exception are empty.
#[must_use]
pub fn make_test_log(id: &str, message: &str) -> Log {
    Log {
        id: id.to_string(),
        level: Severity::Info.into(),
        time: Utc.with_ymd_and_hms(2024, 1, 2, 15, 4, 5).unwrap(),
        host: "web-1".to_string(),
        session_id: None,
        message: message.to_string(),
        script_id: "cron.php".to_string(),
        object: serde_json::Value::Null,
        source: SourceMap::new(),
        exception: None,
    }
}

/// Create a `Request` covering one hour from `2024-01-02T15:04:05Z`.
#[must_use]
pub fn make_test_request() -> Request {
    Request {
        query: "level:error".to_string(),
        time_start: Utc.with_ymd_and_hms(2024, 1, 2, 15, 4, 5).unwrap(),
        time_end: Utc.with_ymd_and_hms(2024, 1, 2, 16, 4, 5).unwrap(),
        size: 50,
    }
}
