use anyhow::{ anyhow, Result };
use chrono::Local;

use crate::cli::commands::OutputFormat;
use crate::cli::ui;
use zoroastervers_docs::implementations::architecture_diagram::architecture_diagram;
use zoroastervers_docs::implementations::checks::check_spec;
use zoroastervers_docs::implementations::diagram_lint::lint_diagram;
use zoroastervers_docs::implementations::report::SpecReport;
use zoroastervers_docs::implementations::tech_specs::tech_specs;

/// Lint the diagram and check the specification sheet; nothing is written to disk
pub fn execute(format: OutputFormat) -> Result<()> {
    let diagram = lint_diagram(architecture_diagram());
    let spec = tech_specs();
    let report = SpecReport::build(&spec, Local::now().naive_local());
    let spec_check = check_spec(&spec, &report)?;

    match format {
        OutputFormat::Text => {
            ui::print_header("Architecture Diagram");
            ui::print_diagram_report(&diagram);
            ui::print_header("Specification Sheet");
            ui::print_spec_check(&spec_check);
        }
        OutputFormat::Json => {
            let issues = diagram.issues
                .iter()
                .map(|issue| {
                    serde_json::json!({
                        "line": issue.line_number,
                        "severity": format!("{:?}", issue.severity).to_lowercase(),
                        "message": issue.message,
                    })
                })
                .collect::<Vec<_>>();
            let summary = serde_json::json!({
                "diagram": {
                    "valid": diagram.is_valid(),
                    "subgraphs": diagram.subgraph_count,
                    "nodes": diagram.node_count,
                    "links": diagram.edge_count,
                    "issues": issues,
                },
                "spec": {
                    "round_trips": spec_check.round_trips,
                    "deterministic": spec_check.deterministic,
                    "missing_keys": spec_check.missing_keys,
                },
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    if !diagram.is_valid() || !spec_check.is_ok() {
        return Err(anyhow!("Checks failed"));
    }
    Ok(())
}
