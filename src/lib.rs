pub mod config;
pub mod errors;
pub mod implementations;
pub mod models;
pub mod traits;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{ ConfigError, DocsConfig, RendererKind };
pub use errors::{ DocsError, DocsResult };
pub use implementations::architecture_diagram::{
    architecture_diagram,
    render_architecture,
    ARCHITECTURE_DIAGRAM,
};
pub use implementations::diagram_lint::lint_diagram;
pub use implementations::report::SpecReport;
pub use implementations::tech_specs::{ tech_specs, write_spec_json };
pub use models::{ diagram::{ DiagramReport, DiagramTarget, ImageFormat }, tech_spec::TechSpec };
pub use traits::DiagramRenderer;
