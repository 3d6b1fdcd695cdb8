//! Implementation of the `strata new` command.
//!
//! Responsibility: collect the base path, feature name and application name
//! (flags, then config defaults, then prompts), call the core scaffold
//! service, and display results. No business logic lives here.

use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::{debug, info, instrument};

use strata_adapters::LocalFilesystem;
use strata_core::{
    application::{ScaffoldReport, ScaffoldService},
    domain::{FeatureScaffold, ScaffoldRequest},
};

use crate::{
    cli::{NewArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

/// Execute the `strata new` command.
///
/// Dispatch sequence:
/// 1. Resolve and check the base path
/// 2. Resolve feature and application names
/// 3. Stage and validate the feature (no I/O)
/// 4. Early-exit if `--dry-run`
/// 5. Confirm with user unless `--yes`, `--quiet` or non-interactive
/// 6. Commit via `ScaffoldService`
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Base path
    let base_path = resolve_base_path(args.path, &config);
    if !base_path.is_dir() {
        return Err(CliError::BasePathNotFound { path: base_path });
    }

    // 2. Names
    let feature = prompt::resolve(args.feature, None, "feature name", "Feature name")?;
    let app = prompt::resolve(
        args.app,
        config.defaults.app_name.clone(),
        "application name",
        "Application name",
    )?;

    let request = ScaffoldRequest::new(&base_path, feature, app);
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));

    // 3. Stage
    let scaffold = service.plan(&request)?;
    debug!(root = %scaffold.root().display(), "Feature staged");

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        return show_plan(&scaffold, &output);
    }

    // 5. Confirm
    if !global.quiet && !args.yes && prompt::can_prompt() {
        show_summary(&scaffold, &output)?;
        if !prompt::confirm("Generate these files?")? {
            return Err(CliError::Cancelled);
        }
    }

    // 6. Commit
    info!(root = %scaffold.root().display(), "Scaffold started");
    let report = service.scaffold(&request)?;
    show_report(&scaffold, &report, &output)
}

/// `--path`, then `defaults.base_path`, then the current directory.
pub fn resolve_base_path(flag: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    flag.or_else(|| config.defaults.base_path.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

// ── Display ───────────────────────────────────────────────────────────────────

fn show_summary(scaffold: &FeatureScaffold, output: &OutputManager) -> CliResult<()> {
    let names = scaffold.names();
    output.header(&format!("Feature '{}'", names.raw().trim()))?;
    output.print(&format!("  Location:   {}", scaffold.root().display()))?;
    output.print(&format!("  Classes:    {}*", names.pascal_case()))?;
    output.print(&format!("  Files:      {}_*.dart", names.snake_case()))?;
    output.print(&format!("  Package:    {}", names.app_name_lower()))?;
    if scaffold.root().exists() {
        output.warning("Feature directory exists; generated files will be overwritten")?;
    }
    Ok(())
}

fn show_plan(scaffold: &FeatureScaffold, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        let files: Vec<_> = scaffold
            .files()
            .map(|f| {
                let path = scaffold.absolute(&f.path);
                json!({
                    "path": path,
                    "role": f.role.to_string(),
                    "bytes": f.size(),
                    "exists": path.exists(),
                })
            })
            .collect();
        let directories: Vec<_> = scaffold
            .directories()
            .map(|d| scaffold.absolute(&d.path))
            .collect();
        output.json(&json!({
            "dry_run": true,
            "root": scaffold.root(),
            "directories": directories,
            "files": files,
        }))?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would create '{}' at {}",
        scaffold.names().snake_case(),
        scaffold.root().display(),
    ))?;
    for dir in scaffold.directories() {
        output.print(&format!("  {}/", dir.path))?;
    }
    for file in scaffold.files() {
        let marker = if scaffold.absolute(&file.path).exists() {
            " (overwrite)"
        } else {
            ""
        };
        output.print(&format!("  {} ({} bytes){marker}", file.path, file.size()))?;
    }
    Ok(())
}

fn show_report(
    scaffold: &FeatureScaffold,
    report: &ScaffoldReport,
    output: &OutputManager,
) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(&json!({
            "root": report.root,
            "directories_created": report.directories_created,
            "files_written": report.files_written,
            "files_overwritten": report.files_overwritten,
        }))?;
        return Ok(());
    }

    output.success(&format!(
        "Feature '{}' created at {}",
        scaffold.names().pascal_case(),
        report.root.display(),
    ))?;
    for path in &report.files_written {
        output.detail(&format!("  {}", relative_to(path, &report.root).display()))?;
    }
    if !report.files_overwritten.is_empty() {
        output.warning(&format!(
            "{} existing file(s) overwritten",
            report.files_overwritten.len()
        ))?;
    }
    Ok(())
}

fn relative_to<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

// ── tests ─────────────────────────────────────────────────────────────────────
