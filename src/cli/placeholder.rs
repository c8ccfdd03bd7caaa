//! Placeholder substitution for log messages.
//!
//! Supports `:name` syntax, where `name` is one or more ASCII word
//! characters. Each token is looked up in the record's source map; unknown
//! names and null values are left as-is.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::palette::{Palette, Tone};
use crate::model::{FieldValue, SourceMap};

static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| compile_regex(r":[0-9A-Za-z_]+"));

fn compile_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("invalid regex pattern `{pattern}`: {err}"),
    }
}

/// Format a source value for display, or `None` for null.
///
/// Strings and numbers are painted; whole floats print without a fraction.
/// Anything else falls back to its JSON text, unstyled.
pub fn format_value<P: Palette + ?Sized>(value: &FieldValue, palette: &P) -> Option<String> {
    match value {
        FieldValue::Null => None,
        FieldValue::String(s) => Some(palette.paint(Tone::StringValue, s)),
        FieldValue::Integer(i) => Some(palette.paint(Tone::NumberValue, &i.to_string())),
        FieldValue::Unsigned(u) => Some(palette.paint(Tone::NumberValue, &u.to_string())),
        FieldValue::Float(f) => Some(palette.paint(Tone::NumberValue, &format_float(*f))),
        FieldValue::Other(v) => Some(v.to_string()),
    }
}

#[allow(clippy::float_cmp)]
fn format_float(value: f64) -> String {
    if value.is_finite() && value.trunc() == value {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Replace `:name` tokens in `message` with values from `source`.
///
/// Single left-to-right pass: substituted values are never rescanned, and a
/// token always matches its full name, so `:id` never touches `:identifier`.
pub fn resolve_placeholders<P: Palette + ?Sized>(
    message: &str,
    source: &SourceMap,
    palette: &P,
) -> String {
    PLACEHOLDER_REGEX
        .replace_all(message, |caps: &Captures<'_>| {
            let token = &caps[0];
            source
                .get(&token[1..])
                .and_then(|value| format_value(value, palette))
                .unwrap_or_else(|| token.to_string())
        })
        .into_owned()
}
