use anyhow::{ Context, Result };
use chrono::Local;
use log::info;
use std::path::{ Path, PathBuf };

use crate::cli::commands::OutputFormat;
use crate::cli::ui;
use zoroastervers_docs::config::DocsConfig;
use zoroastervers_docs::implementations::report::SpecReport;
use zoroastervers_docs::implementations::tech_specs::{ tech_specs, to_json_string, write_spec_json };

/// Specification sheet command
pub fn execute(config: &DocsConfig, output_path: Option<&Path>, format: OutputFormat) -> Result<PathBuf> {
    let spec = tech_specs();
    let path = match output_path {
        Some(path) => config.resolve(path),
        None => config.spec_path(),
    };

    if format == OutputFormat::Text {
        let report = SpecReport::build(&spec, Local::now().naive_local());
        ui::print_report(&report);
    }

    write_spec_json(&spec, &path).with_context(||
        format!("Failed to write specification to {}", path.display())
    )?;

    match format {
        OutputFormat::Text => {
            println!("\n✅ Technical specifications saved to '{}'", path.display());
        }
        OutputFormat::Json => {
            println!("{}", to_json_string(&spec)?);
            info!("Technical specifications saved to '{}'", path.display());
        }
    }

    Ok(path)
}
