//! Argument tree for the `strata` binary.
//!
//! Help text comes from the doc comments; only names, aliases and value enums
//! are spelled out in attributes.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use strata_core::domain::Layer;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

const EXAMPLES: &str = "\
Examples:
  strata new UserProfile --app my_app --path lib/features
  strata new orderHistory --dry-run
  strata list --layer domain --format csv
  strata config set defaults.app_name my_app";

/// Layered feature scaffolding for Flutter apps.
///
/// Generates one feature module (11 directories, 13 Dart files across the
/// data, domain and presentation layers) from a feature name and the Dart
/// package name of the app.
#[derive(Debug, Parser)]
#[command(
    name = "strata",
    version,
    author,
    after_help = EXAMPLES,
    arg_required_else_help = true,
    subcommand_required = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a feature under the base path
    #[command(visible_alias = "n")]
    New(NewArgs),

    /// Show the directories and files every feature gets
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Write a default configuration file
    Init(InitArgs),

    /// Print a shell completion script to stdout
    Completions(CompletionsArgs),

    /// Read or change configuration values
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Feature name, e.g. UserProfile or orderHistory (prompted for if omitted)
    #[arg(value_name = "FEATURE")]
    pub feature: Option<String>,

    /// Dart package name used in generated imports [config: defaults.app_name]
    #[arg(short, long, value_name = "NAME")]
    pub app: Option<String>,

    /// Directory the feature folder is created in [config: defaults.base_path, else .]
    #[arg(short, long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Print the plan without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show one layer
    #[arg(short, long, value_enum)]
    pub layer: Option<LayerArg>,

    #[arg(long, value_enum, default_value_t = ListFormat::Table)]
    pub format: ListFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Aligned columns
    Table,
    /// One path pattern per line
    List,
    /// Object with `directories` and `templates`
    Json,
    /// role,layer,directory,file_pattern,description
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayerArg {
    Data,
    Domain,
    #[value(alias = "ui")]
    Presentation,
}

impl From<LayerArg> for Layer {
    fn from(arg: LayerArg) -> Self {
        match arg {
            LayerArg::Data => Layer::Data,
            LayerArg::Domain => Layer::Domain,
            LayerArg::Presentation => Layer::Presentation,
        }
    }
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write ./.strata.toml instead of the global file
    #[arg(long)]
    pub local: bool,

    /// Replace an existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one merged value
    Get {
        /// e.g. defaults.app_name
        key: String,
    },
    /// Store a value in the config file (empty clears it)
    Set { key: String, value: String },
    /// Print every known key with its merged value
    List,
    /// Print the file `set` writes to
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Commands {
        Cli::try_parse_from(std::iter::once("strata").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    #[test]
    fn command_tree_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn new_with_every_flag() {
        let Commands::New(args) = parse(&[
            "new",
            "UserProfile",
            "-a",
            "my_app",
            "-p",
            "lib/features",
            "-y",
        ]) else {
            panic!("not `new`");
        };
        assert_eq!(args.feature.as_deref(), Some("UserProfile"));
        assert_eq!(args.app.as_deref(), Some("my_app"));
        assert_eq!(args.path, Some(PathBuf::from("lib/features")));
        assert!(args.yes);
        assert!(!args.dry_run);
    }

    #[test]
    fn new_feature_may_be_omitted() {
        let Commands::New(args) = parse(&["n", "--dry-run"]) else {
            panic!("not `new`");
        };
        assert!(args.feature.is_none());
        assert!(args.dry_run);
    }

    #[test]
    fn list_layer_accepts_ui() {
        let Commands::List(args) = parse(&["ls", "-l", "ui"]) else {
            panic!("not `list`");
        };
        assert_eq!(args.layer.map(Layer::from), Some(Layer::Presentation));
        assert_eq!(args.format, ListFormat::Table);
    }

    #[test]
    fn config_set_takes_key_and_value() {
        let Commands::Config(ConfigCommands::Set { key, value }) =
            parse(&["config", "set", "defaults.app_name", "shop"])
        else {
            panic!("not `config set`");
        };
        assert_eq!((key.as_str(), value.as_str()), ("defaults.app_name", "shop"));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["strata", "-q", "-v", "list"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["strata", "list", "-vv", "--output-format", "json"]).unwrap();
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }
}
