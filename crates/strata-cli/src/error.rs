//! Errors surfaced by the `strata` binary.
//!
//! Every [`CliError`] knows its exit code and a few hints for the user. Core
//! errors are wrapped unchanged and keep their own suggestions.

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use strata_core::error::StrataError;

use strata_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input caught before the core is called.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The base output directory does not exist.
    #[error("Base path does not exist: {path}")]
    BasePathNotFound { path: PathBuf },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `strata-core`.
    #[error("Scaffolding failed: {0}")]
    Core(#[from] StrataError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Operation cancelled by user.
    #[error("Operation cancelled")]
    Cancelled,

    /// An interactive prompt could not be shown or read.
    #[error("Prompt failed: {message}")]
    PromptFailed { message: String },

    /// Feature not available (e.g., interactive mode without feature flag).
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Hints printed under the error message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { .. } => vec![
                "Pass both names: strata new <FEATURE> --app <APP>".into(),
                "Or set defaults.app_name with 'strata config set'".into(),
            ],
            Self::BasePathNotFound { path } => vec![
                format!("Create '{}' first, or run from your Flutter project root", path.display()),
                "Or pass an existing directory with --path".into(),
            ],
            Self::ConfigError { .. } => vec![
                "Check the file printed by 'strata config path'".into(),
                "'strata init --force' writes a fresh default config".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec!["Check that stdout and stderr are writable".into()],
            Self::Cancelled => vec!["Nothing was written".into()],
            Self::PromptFailed { .. } => vec![
                "Prompts need a terminal on stdin".into(),
                "Pass the feature name and --app explicitly".into(),
            ],
            Self::FeatureNotAvailable { feature } => vec![format!(
                "Rebuild with the '{feature}' feature: cargo install strata-cli --features {feature}"
            )],
        }
    }

    /// Category deciding the exit code and log level.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::BasePathNotFound { .. } => ErrorCategory::NotFound,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Filesystem => ErrorCategory::Internal,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::Cancelled => ErrorCategory::UserError,
            Self::PromptFailed { .. } => ErrorCategory::UserError,
            Self::FeatureNotAvailable { .. } => ErrorCategory::Configuration,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Render for stderr: message, cause chain (verbose only), suggestions.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: owo_colors::Style| {
            if color {
                text.style(style).to_string()
            } else {
                text.to_string()
            }
        };
        let red = owo_colors::Style::new().red().bold();
        let dim = owo_colors::Style::new().dimmed();

        let mut out = format!("\n{} {self}\n", paint("error:", red));

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&paint(&format!("  caused by: {err}"), dim));
                out.push('\n');
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push('\n');
            for hint in &suggestions {
                out.push_str(&format!("  {} {hint}\n", paint("hint:", owo_colors::Style::new().yellow())));
            }
        }

        if !verbose && self.source().is_some() {
            out.push_str(&paint("\nRe-run with -v to see the cause.\n", dim));
        }

        out
    }

    /// Emit one tracing event at a level matching the category.
    pub fn log(&self) {
        let category = self.category();
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, exit_code = self.exit_code(), "{self}")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, exit_code = self.exit_code(), "{self}")
            }
        }
        if let Some(cause) = self.source() {
            tracing::debug!(%cause, "underlying error");
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use strata_core::application::ApplicationError;
    use strata_core::domain::DomainError;

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn missing_base_path_suggests_flag() {
        let err = CliError::BasePathNotFound {
            path: PathBuf::from("lib/features"),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("--path")));
    }

    #[test]
    fn core_suggestions_pass_through() {
        let err = CliError::Core(DomainError::blank("feature name").into());
        assert!(!err.suggestions().is_empty());
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        assert_eq!(
            CliError::InvalidInput {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            2
        );
    }

    #[test]
    fn blank_name_from_core_is_user_error() {
        let err = CliError::Core(DomainError::blank("feature name").into());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_code_not_found() {
        let err = CliError::BasePathNotFound {
            path: PathBuf::from("/nope"),
        };
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
        let write = CliError::Core(
            ApplicationError::FileWriteFailed {
                path: PathBuf::from("/x"),
                reason: "denied".into(),
            }
            .into(),
        );
        assert_eq!(write.exit_code(), 1);
    }

    // ── render ────────────────────────────────────────────────────────────

    #[test]
    fn plain_render_has_message_and_hints() {
        let err = CliError::BasePathNotFound {
            path: PathBuf::from("/tmp/x"),
        };
        let s = err.render(false, false);
        assert!(s.contains("error: Base path does not exist: /tmp/x"));
        assert!(s.contains("hint: Or pass an existing directory with --path"));
        assert!(!s.contains('\u{1b}'));
    }

    #[test]
    fn cause_shown_only_when_verbose() {
        let err = CliError::IoError {
            message: "write failed".into(),
            source: io::Error::other("disk full"),
        };
        assert!(err.render(true, false).contains("caused by: disk full"));
        let quiet = err.render(false, false);
        assert!(!quiet.contains("disk full"));
        assert!(quiet.contains("-v"));
    }

    #[test]
    fn colored_render_uses_ansi() {
        assert!(CliError::Cancelled.render(false, true).contains('\u{1b}'));
    }
}
