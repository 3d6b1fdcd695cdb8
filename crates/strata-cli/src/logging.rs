//! Tracing subscriber setup for the `strata` binary.
//!
//! The libraries only emit events; this is the one place a subscriber is
//! installed. Logs go to stderr so stdout stays clean for `--output-format
//! json` and `list --format csv`.
//!
//! | Flags      | Level |
//! |------------|-------|
//! | `-q`       | error |
//! | (none)     | warn  |
//! | `-v`       | info  |
//! | `-vv`      | debug |
//! | `-vvv`     | trace |
//!
//! A set `RUST_LOG` replaces the table entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events are shown at the flag-selected level.
const TARGETS: [&str; 3] = ["strata", "strata_core", "strata_adapters"];

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::try_new(directives(level_for(args)))?,
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_target(args.verbose >= 2)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already set: {e}"))
}

fn directives(level: LevelFilter) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={}", level.to_string().to_lowercase()))
        .collect::<Vec<_>>()
        .join(",")
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
