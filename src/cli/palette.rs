//! Styling roles and the palettes that paint them
//!
//! The decorator only names *what* a piece of text is ([`Tone`]); a
//! [`Palette`] decides how it looks. [`ColoredPalette`] emits ANSI escapes via
//! `colored`, [`PlainPalette`] leaves text untouched for pipes and tests.

use colored::Colorize;

use crate::model::Severity;

/// Visual role of a rendered fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Block headings such as `Request` and `Response`
    Heading,
    /// Values in the request block and the detail message
    Value,
    /// Record and session identifiers
    Identifier,
    /// Timestamps in list output
    Timestamp,
    /// Time and host in the detail block
    Emphasis,
    /// Script identifiers
    Script,
    /// Keys in the source dump
    FieldKey,
    /// String source values
    StringValue,
    /// Numeric source values
    NumberValue,
    /// Lines of the exception section
    Exception,
    /// Short level labels
    Level(Severity),
}

/// Turns a fragment of text into its styled form
pub trait Palette {
    /// Style `text` for the given role
    fn paint(&self, tone: Tone, text: &str) -> String;
}

impl<P: Palette + ?Sized> Palette for Box<P> {
    fn paint(&self, tone: Tone, text: &str) -> String {
        (**self).paint(tone, text)
    }
}

impl<P: Palette + ?Sized> Palette for &P {
    fn paint(&self, tone: Tone, text: &str) -> String {
        (**self).paint(tone, text)
    }
}

/// ANSI palette backed by `colored`
///
/// `colored` itself honours `NO_COLOR` and `CLICOLOR_FORCE`, so this palette
/// degrades to plain text when the environment asks for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColoredPalette;

impl Palette for ColoredPalette {
    fn paint(&self, tone: Tone, text: &str) -> String {
        let styled = match tone {
            Tone::Heading => text.green().bold(),
            Tone::Value | Tone::StringValue => text.cyan(),
            Tone::Identifier => text.green(),
            Tone::Timestamp | Tone::NumberValue => text.blue(),
            Tone::Emphasis => text.white(),
            Tone::Script => text.yellow(),
            Tone::FieldKey => text.magenta(),
            Tone::Exception => text.white().on_black(),
            Tone::Level(severity) => match severity {
                Severity::Debug => text.dimmed(),
                Severity::Info => text.blue(),
                Severity::Notice => text.cyan(),
                Severity::Warning => text.yellow(),
                Severity::Error => text.red(),
                Severity::Critical | Severity::Alert => text.white().on_red(),
                Severity::Emergency => text.white().bold().on_bright_red(),
            },
        };
        styled.to_string()
    }
}

/// Palette that returns text unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPalette;

impl Palette for PlainPalette {
    fn paint(&self, _tone: Tone, text: &str) -> String {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_palette_is_identity() {
        let palette = PlainPalette;
        assert_eq!(palette.paint(Tone::Heading, "Request"), "Request");
        assert_eq!(
            palette.paint(Tone::Level(Severity::Emergency), "EMR"),
            "EMR"
        );
    }

    #[test]
    fn test_colored_palette_keeps_text() {
        let palette = ColoredPalette;
        for severity in Severity::ALL {
            let painted = palette.paint(Tone::Level(severity), severity.short());
            assert!(painted.contains(severity.short()));
        }
    }

    #[test]
    fn test_colored_palette_emits_escapes_when_forced() {
        colored::control::set_override(true);
        let painted = ColoredPalette.paint(Tone::Level(Severity::Error), "ERR");
        assert!(painted.starts_with("\x1b["));
        assert!(painted.contains("ERR"));
    }

    #[test]
    fn test_level_tones_match_fixed_colors() {
        colored::control::set_override(true);
        let expected = [
            (Severity::Debug, "DBG".dimmed().to_string()),
            (Severity::Info, "INF".blue().to_string()),
            (Severity::Notice, "NTC".cyan().to_string()),
            (Severity::Warning, "WRN".yellow().to_string()),
            (Severity::Error, "ERR".red().to_string()),
            (Severity::Critical, "CRT".white().on_red().to_string()),
            (Severity::Alert, "ALR".white().on_red().to_string()),
            (
                Severity::Emergency,
                "EMR".white().bold().on_bright_red().to_string(),
            ),
        ];
        for (severity, styled) in expected {
            assert_eq!(
                ColoredPalette.paint(Tone::Level(severity), severity.short()),
                styled,
                "{severity}"
            );
        }
    }

    #[test]
    fn test_boxed_palette_delegates() {
        let palette: Box<dyn Palette> = Box::new(PlainPalette);
        assert_eq!(palette.paint(Tone::Value, "x"), "x");
    }
}
