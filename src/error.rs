//! Error types for embed generation
//!
//! Input-shape problems (unknown link formats, empty fields) never surface
//! here; they are passed through or ignored by the parsers. What remains are
//! template and encoding failures, which indicate a bug rather than bad input.

use thiserror::Error;

/// Top-level generation error
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A bundled template failed to compile
    #[error("Template '{name}' failed to compile: {message}")]
    TemplateCompile { name: &'static str, message: String },

    /// Rendering a compiled template failed
    #[error("Template '{name}' failed to render: {message}")]
    TemplateRender { name: &'static str, message: String },

    /// Runtime data could not be encoded as a JavaScript literal
    #[error("Failed to encode runtime data: {0}")]
    DataEncoding(#[from] serde_json::Error),
}
