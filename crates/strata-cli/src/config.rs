//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `STRATA__DEFAULTS__APP_NAME=my_app`
//! 3. `--config FILE`, then `.strata.toml` in the current directory, then the
//!    global file at [`AppConfig::config_path`]
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides; nested keys are joined with `__`.
pub const ENV_PREFIX: &str = "STRATA";

/// Per-project config file looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = ".strata.toml";

/// Every key understood by `strata config get|set`.
pub const KEYS: [&str; 4] = [
    "defaults.app_name",
    "defaults.base_path",
    "output.no_color",
    "output.format",
];

const FORMATS: [&str; 4] = ["auto", "human", "plain", "json"];

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fallbacks for `strata new`.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Dart package name used in generated imports.
    pub app_name: Option<String>,
    /// Directory features are created in.
    pub base_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load and merge every configuration source.
    ///
    /// `config_file` is the path the user passed via `--config`; unlike the
    /// implicit locations it must exist.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .add_source(toml_source(&Self::config_path()).required(false))
            .add_source(toml_source(Path::new(LOCAL_CONFIG_FILE)).required(false));

        if let Some(path) = config_file {
            builder = builder.add_source(toml_source(path).required(true));
        }

        let merged = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        let config: Self = merged
            .try_deserialize()
            .context("Invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Read a single file without merging, for `config set`.
    ///
    /// A missing file yields the defaults.
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Write this configuration as TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let text = toml::to_string_pretty(self).context("Failed to serialise config")?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Value of a dotted key; `None` for unknown keys, `""` for unset ones.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "defaults.app_name" => self.defaults.app_name.clone().unwrap_or_default(),
            "defaults.base_path" => self
                .defaults
                .base_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self.output.format.clone(),
            _ => return None,
        };
        Some(value)
    }

    /// Set a dotted key. An empty value clears optional keys.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let optional = |v: &str| (!v.trim().is_empty()).then(|| v.trim().to_string());
        match key {
            "defaults.app_name" => self.defaults.app_name = optional(value),
            "defaults.base_path" => self.defaults.base_path = optional(value).map(PathBuf::from),
            "output.no_color" => {
                self.output.no_color = value
                    .parse()
                    .with_context(|| format!("'{value}' is not true or false"))?;
            }
            "output.format" => {
                self.output.format = value.to_string();
            }
            _ => anyhow::bail!("Unknown config key: '{key}' (known: {})", KEYS.join(", ")),
        }
        self.validate()
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.strata.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "strata", "strata")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !FORMATS.contains(&self.output.format.as_str()) {
            anyhow::bail!(
                "output.format must be one of {}, got '{}'",
                FORMATS.join(", "),
                self.output.format
            );
        }
        Ok(())
    }
}

fn toml_source(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}
