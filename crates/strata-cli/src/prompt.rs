//! Interactive prompts.
//!
//! Backed by `dialoguer` when the `interactive` feature is enabled. Without a
//! terminal on stdin, or without the feature, prompting is an error so that
//! scripted runs never hang.

use std::io::IsTerminal as _;

use crate::error::{CliError, CliResult};

/// `true` when a prompt can actually be answered.
pub fn can_prompt() -> bool {
    cfg!(feature = "interactive") && std::io::stdin().is_terminal()
}

/// Ask for a line of text. An empty answer is returned as-is.
#[cfg(feature = "interactive")]
pub fn text(prompt: &str, initial: Option<&str>) -> CliResult<String> {
    use dialoguer::{Input, theme::ColorfulTheme};

    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(prompt)
        .allow_empty(true);
    if let Some(initial) = initial {
        input = input.with_initial_text(initial);
    }
    input.interact_text().map_err(map_prompt_error)
}

#[cfg(not(feature = "interactive"))]
pub fn text(_prompt: &str, _initial: Option<&str>) -> CliResult<String> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

/// Yes/no question defaulting to yes.
#[cfg(feature = "interactive")]
pub fn confirm(prompt: &str) -> CliResult<bool> {
    use dialoguer::{Confirm, theme::ColorfulTheme};

    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(true)
        .interact()
        .map_err(map_prompt_error)
}

#[cfg(not(feature = "interactive"))]
pub fn confirm(_prompt: &str) -> CliResult<bool> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(feature = "interactive")]
fn map_prompt_error(err: dialoguer::Error) -> CliError {
    match err {
        dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::Interrupted => {
            CliError::Cancelled
        }
        other => CliError::PromptFailed {
            message: other.to_string(),
        },
    }
}

/// Resolve a required value: explicit, then fallback, then a prompt.
///
/// `None` from every source is an input error naming `what`.
pub fn resolve(
    explicit: Option<String>,
    fallback: Option<String>,
    what: &str,
    prompt: &str,
) -> CliResult<String> {
    if let Some(value) = explicit.or(fallback) {
        return Ok(value);
    }
    if can_prompt() {
        return text(prompt, None);
    }
    Err(CliError::InvalidInput {
        message: format!("{what} is required when not running interactively"),
        source: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_beats_fallback() {
        let v = resolve(Some("a".into()), Some("b".into()), "x", "x").unwrap();
        assert_eq!(v, "a");
    }

    #[test]
    fn fallback_used_when_missing() {
        let v = resolve(None, Some("b".into()), "x", "x").unwrap();
        assert_eq!(v, "b");
    }

    #[test]
    fn blank_explicit_is_passed_through() {
        // Blank names are the core's to reject.
        let v = resolve(Some("  ".into()), Some("b".into()), "x", "x").unwrap();
        assert_eq!(v, "  ");
    }
}
