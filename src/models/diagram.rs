use std::fmt;
use std::path::PathBuf;

/// Output image format requested from a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Where a rendered diagram goes and at what size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramTarget {
    pub png: PathBuf,
    pub svg: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Default for DiagramTarget {
    fn default() -> Self {
        Self {
            png: PathBuf::from("architecture_diagram.png"),
            svg: PathBuf::from("architecture_diagram.svg"),
            width: 1400,
            height: 1000,
        }
    }
}

/// Severity levels for diagram lint findings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// A single finding from the diagram lint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramIssue {
    pub severity: IssueSeverity,
    pub message: String,
    /// 1-based line in the diagram text
    pub line_number: usize,
}

/// Result of linting a diagram description
#[derive(Debug, Clone, Default)]
pub struct DiagramReport {
    pub issues: Vec<DiagramIssue>,
    pub subgraph_count: usize,
    pub node_count: usize,
    pub edge_count: usize,
}

impl DiagramReport {
    pub fn is_valid(&self) -> bool {
        !self.issues.iter().any(|i| i.severity == IssueSeverity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &DiagramIssue> {
        self.issues.iter().filter(|i| i.severity == IssueSeverity::Error)
    }
}
