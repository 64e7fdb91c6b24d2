use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while generating the documentation artifacts
#[derive(Debug, Error)]
pub enum DocsError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize specification: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Error in external tool {tool}: {message}")]
    ExternalToolError { tool: String, message: String },

    #[error("Renderer {tool} timed out after {seconds}s")]
    RendererTimeout { tool: String, seconds: u64 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid diagram: {0}")]
    InvalidDiagram(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for documentation generation
pub type DocsResult<T> = Result<T, DocsError>;

impl DocsError {
    pub fn external(tool: &str, message: impl Into<String>) -> Self {
        DocsError::ExternalToolError {
            tool: tool.to_string(),
            message: message.into(),
        }
    }
}
