//! Flags accepted by every `strata` subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

/// Flattened into [`super::Cli`]; all flags are `global = true`.
#[derive(Debug, Args)]
#[command(next_help_heading = "Global options")]
pub struct GlobalArgs {
    /// More log output on stderr: -v info, -vv every entry, -vvv every filesystem call
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colour codes (also set by NO_COLOR)
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read settings from FILE on top of the global and project config
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How results are written to stdout
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

/// Rendering of command results on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain when piped
    #[default]
    Auto,
    /// Coloured, with symbols
    Human,
    /// No colour
    Plain,
    /// Pretty-printed JSON
    Json,
}
