//! Error types for page builds

use thiserror::Error;

/// Errors that abort a page build.
///
/// Extraction anomalies and reconciliation mismatches never surface here; they are
/// absorbed during rendering. Anything that does reach this type means no output
/// was produced.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The event stream handed to the body renderer was not balanced
    #[error("Render error: {0}")]
    Render(String),
    /// The document tree could not be serialized to HTML
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// The table of contents could not be encoded for the client script
    #[error("TOC data encoding failed: {0}")]
    TocData(#[from] serde_json::Error),
    /// Reading input or writing the finished page failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
