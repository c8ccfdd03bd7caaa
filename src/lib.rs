//! logview - Terminal viewer for structured log records
//!
//! Renders query requests and log records as color-coded terminal text,
//! substituting `:name` placeholders in messages from each record's source
//! fields.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod config;
pub mod dump;
pub mod model;

#[cfg(test)]
pub mod testutil;

// Re-export commonly used types
pub use cli::{ColoredPalette, Decorator, Palette, PlainPalette, Tone};
pub use config::{ColorMode, ViewerConfig};
pub use dump::QueryDump;
pub use model::{Exception, FieldValue, Log, LogLevel, Request, Severity, TraceFrame};
