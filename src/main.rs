//! logview - Terminal viewer for structured log records
//!
//! CLI entry point: loads a query dump and renders it with the decorator.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use logview::cli::{ColoredPalette, Decorator, Palette, PlainPalette};
use logview::config::{ColorMode, ViewerConfig};
use logview::dump::QueryDump;

/// Render structured log records in the terminal
///
/// Reads a query dump (the request plus the records it returned) and prints
/// it with color-coded fields.
#[derive(Parser, Debug)]
#[command(name = "logview", version, about)]
struct Cli {
    /// Path to a logview.toml configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// When to use colors (overrides the config file)
    #[arg(long, value_enum, global = true)]
    color: Option<ColorMode>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the request summary and one line per record
    List {
        /// Path to the query dump JSON file
        dump: PathBuf,

        /// Substitute `:name` placeholders in messages
        #[arg(long, conflicts_with = "raw")]
        placeholders: bool,

        /// Print messages exactly as stored
        #[arg(long)]
        raw: bool,

        /// Skip the request summary
        #[arg(long)]
        no_request: bool,
    },
    /// Print every field of a single record
    Show {
        /// Path to the query dump JSON file
        dump: PathBuf,

        /// Id of the record to show
        id: String,
    },
}

/// Decide the placeholder flag: explicit flags win over the config default.
const fn resolve_placeholder_flag(placeholders: bool, raw: bool, config_default: bool) -> bool {
    if placeholders {
        true
    } else if raw {
        false
    } else {
        config_default
    }
}

/// Decide whether to emit ANSI colors for the given mode.
const fn use_colors(mode: ColorMode, is_terminal: bool) -> bool {
    match mode {
        ColorMode::Auto => is_terminal,
        ColorMode::Always => true,
        ColorMode::Never => false,
    }
}

fn build_decorator(config: &ViewerConfig, mode: ColorMode) -> Result<Decorator<Box<dyn Palette>>> {
    // `colored` drops styling on non-terminal stdout unless overridden
    if mode == ColorMode::Always {
        colored::control::set_override(true);
    }
    let palette: Box<dyn Palette> = if use_colors(mode, std::io::stdout().is_terminal()) {
        Box::new(ColoredPalette)
    } else {
        Box::new(PlainPalette)
    };
    Decorator::new(palette)
        .with_time_format(&config.time_format)
        .context("Invalid time format in configuration")
}

fn load_dump(path: &Path) -> Result<QueryDump> {
    let dump = QueryDump::from_path(path)?;
    debug!(path = %path.display(), records = dump.logs.len(), "loaded query dump");
    if dump.exceeds_requested_size() {
        warn!(
            records = dump.logs.len(),
            size = dump.request.size,
            "dump holds more records than the request asked for"
        );
    }
    Ok(dump)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ViewerConfig::from_path(path)
            .with_context(|| format!("Failed to load config from '{}'", path.display()))?,
        None => ViewerConfig::default(),
    };
    debug!(?config, "using viewer config");

    let decorator = build_decorator(&config, cli.color.unwrap_or(config.color))?;

    match cli.command {
        Command::List {
            dump,
            placeholders,
            raw,
            no_request,
        } => {
            let dump = load_dump(&dump)?;
            if !no_request {
                decorator.print_request(&dump.request);
            }
            let resolve = resolve_placeholder_flag(placeholders, raw, config.placeholders);
            decorator.print_list(&dump.logs, resolve);
        }
        Command::Show { dump, id } => {
            let dump = load_dump(&dump)?;
            let entity = dump.find_log(&id).with_context(|| {
                format!("No record with id '{id}'. Available ids: {}", available_ids(&dump))
            })?;
            decorator.print_details(entity);
        }
    }

    Ok(())
}

/// Format record ids for error messages.
fn available_ids(dump: &QueryDump) -> String {
    if dump.logs.is_empty() {
        return "(none)".to_string();
    }
    dump.logs
        .iter()
        .map(|log| log.id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
