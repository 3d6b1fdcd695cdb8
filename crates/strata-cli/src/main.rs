//! `strata`: generate a layered Flutter feature (data, domain, presentation)
//! from a feature name and an app name.
//!
//! Exit codes: `0` success, `1` internal, `2` bad input or cancelled,
//! `3` base path missing, `4` configuration.

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod prompt;

fn main() -> ExitCode {
    // Values from .env act like real environment variables, so they must be
    // loaded before clap reads NO_COLOR and before config reads STRATA__*.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help and --version are "errors" that print to stdout.
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };

    if let Err(e) = logging::init_logging(&cli.global) {
        eprintln!("strata: {e:#}");
        return ExitCode::from(1);
    }

    let report = Reporter {
        verbose: cli.global.verbose > 0,
        no_color: cli.global.no_color,
    };

    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            return report.fail(CliError::ConfigError {
                message: format!("{e:#}"),
                source: Some(e.into()),
            });
        }
    };
    let report = Reporter {
        no_color: report.no_color || config.output.no_color,
        ..report
    };

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report.fail(e),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig) -> CliResult<()> {
    let output = OutputManager::new(&cli.global, &config);
    debug!(format = ?output.format(), quiet = output.is_quiet(), "Output configured");

    match cli.command {
        Commands::New(args) => commands::new::execute(args, cli.global, config, output),
        Commands::List(args) => commands::list::execute(args, output),
        Commands::Init(args) => commands::init::execute(args, cli.global, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, cli.global, config, output),
    }
}

/// Renders a failed run on stderr.
#[derive(Debug, Clone, Copy)]
struct Reporter {
    verbose: bool,
    no_color: bool,
}

impl Reporter {
    fn fail(self, err: CliError) -> ExitCode {
        err.log();
        let color = !self.no_color && std::io::stderr().is_terminal();
        eprint!("{}", err.render(self.verbose, color));
        ExitCode::from(err.exit_code())
    }
}
