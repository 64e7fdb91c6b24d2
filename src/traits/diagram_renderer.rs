use async_trait::async_trait;

use crate::errors::DocsResult;
use crate::models::diagram::ImageFormat;

/// Turns Mermaid diagram text into image bytes
#[async_trait]
pub trait DiagramRenderer: Send + Sync {
    /// Short name used in logs and error messages
    fn name(&self) -> &str;

    /// Render `source` to the requested format at the given pixel size
    async fn render(
        &self,
        source: &str,
        format: ImageFormat,
        width: u32,
        height: u32,
    ) -> DocsResult<Vec<u8>>;
}
