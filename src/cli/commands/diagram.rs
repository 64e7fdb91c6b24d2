use anyhow::Result;
use log::info;
use std::path::PathBuf;

use crate::cli::commands::OutputFormat;
use crate::cli::ui;
use zoroastervers_docs::config::DocsConfig;
use zoroastervers_docs::implementations::architecture_diagram::{ render_architecture, write_source };
use zoroastervers_docs::implementations::renderer::renderer_from_config;
use zoroastervers_docs::models::diagram::DiagramTarget;

/// Architecture diagram command
pub async fn execute(config: &DocsConfig, format: OutputFormat) -> Result<(PathBuf, PathBuf)> {
    let target = DiagramTarget {
        png: config.resolve(&config.diagram.png_file),
        svg: config.resolve(&config.diagram.svg_file),
        width: config.diagram.width,
        height: config.diagram.height,
    };

    if let Some(source) = &config.diagram.source_file {
        let source = config.resolve(source);
        write_source(&source)?;
        if format == OutputFormat::Text {
            ui::print_info(&format!("Diagram source saved to {}", source.display()));
        }
    }

    let renderer = renderer_from_config(&config.renderer)?;
    info!("Using {} renderer", renderer.name());

    let spinner = ui::spinner_with_message("Rendering architecture diagram...");
    let result = render_architecture(renderer.as_ref(), &target).await;
    match &result {
        Ok(_) => spinner.finish_with_message("Diagram rendered"),
        Err(_) => spinner.abandon_with_message("Rendering failed"),
    }
    let (png_path, svg_path) = result?;

    match format {
        OutputFormat::Text => {
            println!(
                "Improved architecture diagram saved as {} and {}",
                png_path.display(),
                svg_path.display()
            );
        }
        OutputFormat::Json => {
            let paths = serde_json::json!({ "png": png_path, "svg": svg_path });
            println!("{}", serde_json::to_string_pretty(&paths)?);
        }
    }

    Ok((png_path, svg_path))
}
