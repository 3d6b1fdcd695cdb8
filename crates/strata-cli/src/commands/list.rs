//! Implementation of the `strata list` command.

use serde_json::json;

use strata_core::application::{CatalogService, TemplateInfo};

use crate::{
    cli::{ListArgs, ListFormat, OutputFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let service = CatalogService::new();

    let (templates, directories) = match args.layer {
        Some(layer) => {
            let layer = layer.into();
            (
                service.list_layer(layer),
                service
                    .directories()
                    .into_iter()
                    .filter(|d| d.layer == layer)
                    .collect(),
            )
        }
        None => (service.list(), service.directories()),
    };

    // `--output-format json` upgrades the default table.
    let format = match (args.format, output.format()) {
        (ListFormat::Table, OutputFormat::Json) => ListFormat::Json,
        (format, _) => format,
    };

    match format {
        ListFormat::Table => {
            output.header("Directories:")?;
            for dir in &directories {
                output.print(&format!("  {:<13} {}/", dir.layer.as_str(), dir.path))?;
            }
            output.print("")?;
            output.header("Files:")?;
            for t in &templates {
                output.print(&format!(
                    "  {:<13} {:<44} {}",
                    t.layer.as_str(),
                    path_pattern(t),
                    t.description
                ))?;
            }
        }

        ListFormat::Json => {
            output.json(&json!({
                "directories": directories,
                "templates": templates,
            }))?;
        }

        ListFormat::List => {
            for t in &templates {
                output.data(&path_pattern(t))?;
            }
        }

        ListFormat::Csv => {
            output.data("role,layer,directory,file_pattern,description")?;
            for t in &templates {
                output.data(&format!(
                    "{},{},{},{},{}",
                    t.role, t.layer, t.directory, t.file_pattern, t.description
                ))?;
            }
        }
    }

    Ok(())
}

fn path_pattern(t: &TemplateInfo) -> String {
    format!("{}/{}", t.directory, t.file_pattern)
}
