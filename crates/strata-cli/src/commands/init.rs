//! `strata init`: create a default configuration file.

use std::path::PathBuf;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Create a default Strata configuration file.
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    output.info("Initialising configuration...")?;

    let config_path = target_path(&args, &global);

    // Bail early if the file already exists and --force was not given.
    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    AppConfig::default()
        .save(&config_path)
        .map_err(|e| CliError::ConfigError {
            message: format!("{e:#}"),
            source: Some(e.into()),
        })?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

/// `--local`, then `--config`, then the global location.
fn target_path(args: &InitArgs, global: &GlobalArgs) -> PathBuf {
    if args.local {
        return PathBuf::from(LOCAL_CONFIG_FILE);
    }
    global.config.clone().unwrap_or_else(AppConfig::config_path)
}
