use std::fs;
use std::path::{ Path, PathBuf };
use std::str::FromStr;

use log::{ debug, info };
use serde::{ Deserialize, Serialize };
use thiserror::Error;

pub const RENDERER_ENV: &str = "ZDOCS_RENDERER";
pub const MMDC_PATH_ENV: &str = "ZDOCS_MMDC_PATH";
pub const KROKI_URL_ENV: &str = "ZDOCS_KROKI_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Unknown renderer: {0} (expected mmdc or kroki)")]
    UnknownRenderer(String),

    #[error("Invalid dimension {name}: {value}")]
    InvalidDimension { name: String, value: u32 },

    #[error("Renderer timeout must be at least one second")]
    InvalidTimeout,
}

/// Backend used to turn Mermaid text into images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// mermaid-cli subprocess
    Mmdc,
    /// Kroki HTTP service
    Kroki,
}

impl FromStr for RendererKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mmdc" | "mermaid-cli" => Ok(RendererKind::Mmdc),
            "kroki" => Ok(RendererKind::Kroki),
            other => Err(ConfigError::UnknownRenderer(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    pub kind: RendererKind,

    /// Path or name of the mermaid-cli executable
    pub mmdc_path: String,

    /// Base URL of the Kroki service
    pub kroki_url: String,

    /// Upper bound for a single render
    pub timeout_secs: u64,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            kind: RendererKind::Mmdc,
            mmdc_path: "mmdc".to_string(),
            kroki_url: "https://kroki.io".to_string(),
            timeout_secs: 60,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    pub png_file: PathBuf,
    pub svg_file: PathBuf,

    /// Where to also write the raw Mermaid text, if anywhere
    pub source_file: Option<PathBuf>,

    pub width: u32,
    pub height: u32,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            png_file: PathBuf::from("architecture_diagram.png"),
            svg_file: PathBuf::from("architecture_diagram.svg"),
            source_file: None,
            width: 1400,
            height: 1000,
        }
    }
}

/// Top-level configuration, loaded from YAML and overridden by env and flags
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Directory that relative output paths are resolved against
    pub output_dir: Option<PathBuf>,

    pub spec_file: PathBuf,

    pub diagram: DiagramConfig,

    pub renderer: RendererConfig,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            spec_file: PathBuf::from("android_app_specs.json"),
            diagram: DiagramConfig::default(),
            renderer: RendererConfig::default(),
        }
    }
}

impl DocsConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: DocsConfig = serde_yaml::from_str(&contents)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise, then apply env overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if dotenv::dotenv().is_ok() {
            debug!("Loaded environment variables from .env file");
        }

        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                debug!("No config file given, using defaults");
                Self::default()
            }
        };
        config.apply_env_with(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup (the process environment in `load`)
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
        where F: Fn(&str) -> Option<String>
    {
        if let Some(kind) = lookup(RENDERER_ENV) {
            self.renderer.kind = kind.parse()?;
            debug!("Renderer overridden from {}: {:?}", RENDERER_ENV, self.renderer.kind);
        }
        if let Some(path) = lookup(MMDC_PATH_ENV) {
            self.renderer.mmdc_path = path;
        }
        if let Some(url) = lookup(KROKI_URL_ENV) {
            self.renderer.kroki_url = url;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("width", self.diagram.width), ("height", self.diagram.height)] {
            if value == 0 {
                return Err(ConfigError::InvalidDimension { name: name.to_string(), value });
            }
        }
        if self.renderer.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(())
    }

    /// Resolve an output path against `output_dir`; absolute paths pass through
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    pub fn spec_path(&self) -> PathBuf {
        self.resolve(&self.spec_file)
    }
}
