//! CLI output formatting
//!
//! Provides human-readable terminal display for log records,
//! with color-coded fields and message placeholder substitution.

pub mod display;
pub mod palette;
pub mod placeholder;

pub use display::Decorator;
pub use palette::{ColoredPalette, Palette, PlainPalette, Tone};
pub use placeholder::{format_value, resolve_placeholders};
