use std::time::Duration;

use async_trait::async_trait;
use log::{ debug, info, warn };
use tokio::process::Command;

use crate::config::{ RendererConfig, RendererKind };
use crate::errors::{ DocsError, DocsResult };
use crate::models::diagram::ImageFormat;
use crate::traits::diagram_renderer::DiagramRenderer;

/// Renders through the mermaid-cli (`mmdc`) executable
#[derive(Debug, Clone)]
pub struct MermaidCliRenderer {
    executable: String,
    timeout: Duration,
}

impl MermaidCliRenderer {
    pub fn new(executable: impl Into<String>, timeout: Duration) -> Self {
        Self { executable: executable.into(), timeout }
    }
}

#[async_trait]
impl DiagramRenderer for MermaidCliRenderer {
    fn name(&self) -> &str {
        "mmdc"
    }

    async fn render(
        &self,
        source: &str,
        format: ImageFormat,
        width: u32,
        height: u32
    ) -> DocsResult<Vec<u8>> {
        // mmdc only reads and writes files
        let workdir = tempfile::tempdir()?;
        let input = workdir.path().join("diagram.mmd");
        let output = workdir.path().join(format!("diagram.{}", format.extension()));
        tokio::fs::write(&input, source).await?;

        debug!("Running {} for {} at {}x{}", self.executable, format, width, height);
        let mut command = Command::new(&self.executable);
        command
            .arg("-i")
            .arg(&input)
            .arg("-o")
            .arg(&output)
            .arg("-w")
            .arg(width.to_string())
            .arg("-H")
            .arg(height.to_string())
            .kill_on_drop(true);
        let child = command.output();

        let result = match tokio::time::timeout(self.timeout, child).await {
            Ok(result) => result,
            Err(_) => {
                warn!("{} did not finish within {:?}", self.executable, self.timeout);
                return Err(DocsError::RendererTimeout {
                    tool: self.name().to_string(),
                    seconds: self.timeout.as_secs(),
                });
            }
        };

        let result = result.map_err(|e| {
            DocsError::external(self.name(), format!("failed to start {}: {}", self.executable, e))
        })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(
                DocsError::external(
                    self.name(),
                    format!("exited with {}: {}", result.status, stderr.trim())
                )
            );
        }

        let bytes = tokio::fs::read(&output).await?;
        info!("Rendered {} bytes of {} with mmdc", bytes.len(), format);
        Ok(bytes)
    }
}

/// Renders through a Kroki HTTP service
#[derive(Debug, Clone)]
pub struct KrokiRenderer {
    client: reqwest::Client,
    base_url: String,
}

impl KrokiRenderer {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> DocsResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn endpoint(&self, format: ImageFormat) -> String {
        format!("{}/mermaid/{}", self.base_url.trim_end_matches('/'), format.extension())
    }
}

#[async_trait]
impl DiagramRenderer for KrokiRenderer {
    fn name(&self) -> &str {
        "kroki"
    }

    async fn render(
        &self,
        source: &str,
        format: ImageFormat,
        width: u32,
        height: u32
    ) -> DocsResult<Vec<u8>> {
        let url = self.endpoint(format);
        // Kroki sizes Mermaid output itself
        debug!("POST {} (requested {}x{} is not forwarded)", url, width, height);

        let response = self.client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(source.to_string())
            .send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            warn!("Kroki error: HTTP {} - {}", status, message);
            return Err(DocsError::external(self.name(), format!("HTTP {}: {}", status, message)));
        }

        let bytes = response.bytes().await?.to_vec();
        info!("Rendered {} bytes of {} with kroki", bytes.len(), format);
        Ok(bytes)
    }
}

/// Build the renderer selected in the configuration
pub fn renderer_from_config(config: &RendererConfig) -> DocsResult<Box<dyn DiagramRenderer>> {
    let timeout = Duration::from_secs(config.timeout_secs);
    match config.kind {
        RendererKind::Mmdc => Ok(Box::new(MermaidCliRenderer::new(&config.mmdc_path, timeout))),
        RendererKind::Kroki => Ok(Box::new(KrokiRenderer::new(&config.kroki_url, timeout)?)),
    }
}
