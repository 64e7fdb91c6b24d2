pub mod diagram_renderer;

// Re-export traits
pub use diagram_renderer::DiagramRenderer;
