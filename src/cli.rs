//! Command-line interface definition.
//!
//! Flags override the config file, which overrides built-in defaults. Flags
//! that are `Option` stay `None` when absent so the precedence chain stays
//! visible at the call site.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_complete::Shell;

use crate::version;

/// Output formats selectable with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// asciicast v2 file, playable with `asciinema play`.
    Cast,
    /// Animated SVG. Not produced directly; the tool prints the
    /// conversion command instead.
    Svg,
}

/// Record a scripted terminal demo to an asciicast v2 file.
#[derive(Debug, Parser)]
#[command(name = "tdr", version = version::VERSION)]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "cast")]
    pub format: Format,

    /// Output filename (defaults to the configured output path)
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Terminal width in columns
    #[arg(long, value_name = "COLS")]
    pub width: Option<u16>,

    /// Terminal height in rows
    #[arg(long, value_name = "ROWS")]
    pub height: Option<u16>,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
