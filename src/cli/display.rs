//! Rich terminal display for log records
//!
//! Renders query requests, log lists and single-record details as
//! human-readable text. Every renderer has a pure `render_*` form returning
//! the text and a `print_*` form writing it to stdout.

use anyhow::{bail, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

use super::palette::{ColoredPalette, Palette, Tone};
use super::placeholder::{format_value, resolve_placeholders};
use crate::model::{is_suppressed_key, Log, LogLevel, Request};

/// Default timestamp layout, e.g. `Jan  2 15:04:05`
pub const DEFAULT_TIME_FORMAT: &str = "%b %e %H:%M:%S";

/// Returns true if `format` is a non-empty strftime string chrono can render
#[must_use]
pub fn is_valid_time_format(format: &str) -> bool {
    !format.is_empty() && StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

/// Display handler that turns records into styled terminal text
#[derive(Debug, Clone)]
pub struct Decorator<P: Palette = ColoredPalette> {
    palette: P,
    time_format: String,
}

impl Default for Decorator<ColoredPalette> {
    fn default() -> Self {
        Self::new(ColoredPalette)
    }
}

impl<P: Palette> Decorator<P> {
    /// Create a decorator painting with `palette` and the default time format
    #[must_use]
    pub fn new(palette: P) -> Self {
        Self {
            palette,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }

    /// Use a custom strftime layout for every timestamp
    pub fn with_time_format(mut self, format: &str) -> Result<Self> {
        if !is_valid_time_format(format) {
            bail!("Invalid time format '{format}'");
        }
        self.time_format = format.to_string();
        Ok(self)
    }

    /// Render the block describing the query that produced the results
    #[must_use]
    pub fn render_request(&self, req: &Request) -> String {
        let value = |text: &str| self.palette.paint(Tone::Value, text);
        let lines = [
            String::new(),
            self.palette.paint(Tone::Heading, "Request"),
            format!(" • Query: {}", value(&req.query)),
            format!(" • Time start: {}", value(&self.format_time(&req.time_start))),
            format!(" • Time end: {}", value(&self.format_time(&req.time_end))),
            format!(" • Size: {}", value(&req.size.to_string())),
            String::new(),
        ];
        join_lines(&lines)
    }

    /// Print the request block to stdout
    pub fn print_request(&self, req: &Request) {
        print!("{}", self.render_request(req));
    }

    /// Render one line per record, in input order
    #[must_use]
    pub fn render_list(&self, list: &[Log], resolve: bool) -> String {
        let lines: Vec<String> = list
            .iter()
            .map(|entity| {
                let message = if resolve {
                    resolve_placeholders(&entity.message, &entity.source, &self.palette)
                } else {
                    entity.message.clone()
                };
                format!(
                    "{} {} {} {}",
                    self.palette
                        .paint(Tone::Timestamp, &self.format_time(&entity.time)),
                    self.palette.paint(Tone::Identifier, &entity.id),
                    self.colorize_level(entity.level),
                    single_line(&message)
                )
            })
            .collect();
        join_lines(&lines)
    }

    /// Print the list to stdout
    pub fn print_list(&self, list: &[Log], resolve: bool) {
        print!("{}", self.render_list(list, resolve));
    }

    /// Render the full detail block for one record
    #[must_use]
    pub fn render_details(&self, entity: &Log) -> String {
        let p = &self.palette;
        let mut lines = vec![
            String::new(),
            p.paint(Tone::Heading, "Response"),
            format!(" • Id: {}", p.paint(Tone::Identifier, &entity.id)),
            format!(" • Level: {}", self.colorize_level(entity.level)),
            format!(
                " • Time: {}",
                p.paint(Tone::Emphasis, &self.format_time(&entity.time))
            ),
            format!(" • Host: {}", p.paint(Tone::Emphasis, &entity.host)),
        ];

        if let Some(session) = entity.session() {
            lines.push(format!(
                " • Session id: {}",
                p.paint(Tone::Identifier, session)
            ));
        }

        let message = resolve_placeholders(&entity.message, &entity.source, p);
        lines.push(format!(" • Message: {}", p.paint(Tone::Value, &message)));
        lines.push(format!(
            " • Script id: {}",
            p.paint(Tone::Script, &entity.script_id)
        ));
        lines.push(format!(" • Object: {}", display_object(&entity.object)));

        lines.push(" • Source:".to_string());
        for (key, value) in &entity.source {
            if is_suppressed_key(key) {
                continue;
            }
            // Null values have nothing to show
            let Some(formatted) = format_value(value, p) else {
                continue;
            };
            lines.push(format!(
                "   • {}: {formatted}",
                p.paint(Tone::FieldKey, key)
            ));
        }

        if let Some(exception) = entity.raised_exception() {
            lines.push(" • Exception:".to_string());
            lines.push(p.paint(
                Tone::Exception,
                &format!("   • Message: {}", exception.message),
            ));
            lines.push(p.paint(Tone::Exception, &format!("   • Code: {}", exception.code)));
            for frame in &exception.trace {
                lines.push(p.paint(
                    Tone::Exception,
                    &format!("   • File: {}:{}", frame.file, frame.line),
                ));
            }
        }

        lines.push(String::new());
        join_lines(&lines)
    }

    /// Print the detail block to stdout
    pub fn print_details(&self, entity: &Log) {
        print!("{}", self.render_details(entity));
    }

    /// Short colored label for a level; unknown codes print the raw number
    #[must_use]
    pub fn colorize_level(&self, level: LogLevel) -> String {
        level.severity().map_or_else(
            || level.code.to_string(),
            |severity| self.palette.paint(Tone::Level(severity), severity.short()),
        )
    }

    fn format_time(&self, time: &DateTime<Utc>) -> String {
        time.format(&self.time_format).to_string()
    }
}

/// Join lines with a trailing newline; empty input renders nothing
fn join_lines(lines: &[String]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Escape line breaks so a message occupies exactly one output line
fn single_line(message: &str) -> String {
    message
        .replace("\r\n", "\\n")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Display an opaque object value without JSON quoting for plain strings
fn display_object(object: &serde_json::Value) -> String {
    match object {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
