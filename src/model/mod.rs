//! Domain records consumed by the display layer
//!
//! Everything here is produced by the query layer and treated as read-only.

pub mod level;
pub mod log;
pub mod request;

pub use level::{LogLevel, Severity};
pub use log::{
    is_suppressed_key, Exception, FieldValue, Log, SourceMap, TraceFrame, SUPPRESSED_SOURCE_KEYS,
};
pub use request::Request;
