//! Everything `strata` writes to stdout goes through [`OutputManager`].

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::{OwoColorize, Style};
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // The flag wins over the config file; Auto falls through to it.
        let requested = match args.output_format {
            OutputFormat::Auto => OutputFormat::from_str(&config.output.format, true)
                .unwrap_or(OutputFormat::Auto),
            explicit => explicit,
        };

        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    /// Status text; dropped under `--quiet`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.status(msg.to_owned())
    }

    /// Results meant for pipes (CSV rows, config values). Never suppressed.
    pub fn data(&self, line: &str) -> io::Result<()> {
        self.term.write_line(line)
    }

    /// Pretty JSON on stdout. Never suppressed.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{2713}', Style::new().green(), msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.marked('!', Style::new().yellow(), msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{2139}', Style::new().blue(), msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        self.status(self.paint(text, Style::new().cyan().bold()))
    }

    /// Secondary line, e.g. a generated path under the summary.
    pub fn detail(&self, text: &str) -> io::Result<()> {
        self.status(self.paint(text, Style::new().dimmed()))
    }

    fn marked(&self, mark: char, style: Style, msg: &str) -> io::Result<()> {
        let mark = self.paint(&mark.to_string(), style.bold());
        let msg = self.paint(msg, style);
        self.status(format!("{mark} {msg}"))
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.no_color {
            text.to_owned()
        } else {
            text.style(style).to_string()
        }
    }

    fn status(&self, line: String) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&line)
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
