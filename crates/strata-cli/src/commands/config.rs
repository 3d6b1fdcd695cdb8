//! `strata config`: read and write configuration values.

use std::path::PathBuf;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::{AppConfig, KEYS},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data(&value)?;
        }

        ConfigCommands::Set { key, value } => {
            // Edit the file alone so env overrides are not persisted.
            let path = active_path(&global);
            let mut on_disk = AppConfig::load_file(&path).map_err(config_error)?;
            on_disk.set(&key, &value).map_err(config_error)?;
            on_disk.save(&path).map_err(config_error)?;
            output.success(&format!("{key} = {value:?} ({})", path.display()))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            for key in KEYS {
                let value = config.get(key).unwrap_or_default();
                output.data(&format!("{key} = {value:?}"))?;
            }
        }

        ConfigCommands::Path => {
            output.data(&active_path(&global).display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn active_path(global: &GlobalArgs) -> PathBuf {
    global.config.clone().unwrap_or_else(AppConfig::config_path)
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    config.get(key).ok_or_else(|| CliError::ConfigError {
        message: format!("Unknown config key: '{key}' (known: {})", KEYS.join(", ")),
        source: None,
    })
}

fn config_error(e: anyhow::Error) -> CliError {
    CliError::ConfigError {
        message: format!("{e:#}"),
        source: Some(e.into()),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let mut cfg = AppConfig::default();
        cfg.defaults.app_name = Some("shop".into());
        assert_eq!(get_config_value(&cfg, "defaults.app_name").unwrap(), "shop");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }
}
