// Loader lives in implementations::config
pub use crate::implementations::config::{
    ConfigError,
    DiagramConfig,
    DocsConfig,
    RendererConfig,
    RendererKind,
    KROKI_URL_ENV,
    MMDC_PATH_ENV,
    RENDERER_ENV,
};
