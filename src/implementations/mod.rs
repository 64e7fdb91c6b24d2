use std::path::Path;

use crate::errors::DocsResult;

pub mod architecture_diagram;
pub mod checks;
pub mod config;
pub mod diagram_lint;
pub mod renderer;
pub mod report;
pub mod tech_specs;

/// Write `bytes` to `path`, creating missing parent directories
pub(crate) fn write_output(path: &Path, bytes: &[u8]) -> DocsResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
