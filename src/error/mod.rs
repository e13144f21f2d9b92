//! Error handling for the symptom analyzer.

use std::io;
use std::path::PathBuf;

/// Specialized error type for artifact loading and inference
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    /// Error opening or reading an artifact or reference file
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File the read failed on
        path: PathBuf,
        /// Underlying IO error
        source: io::Error,
    },

    /// Error parsing a JSON artifact
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        /// Artifact the parse failed on
        path: PathBuf,
        /// Underlying serde error
        source: serde_json::Error,
    },

    /// Error reading the medicine reference table
    #[error("invalid CSV in {}: {source}", path.display())]
    Csv {
        /// Table the parse failed on
        path: PathBuf,
        /// Underlying csv error
        source: csv::Error,
    },

    /// A loaded artifact failed consistency validation
    #[error("artifact validation failed: {0}")]
    Artifact(String),

    /// Feature vector length does not match the classifier input layer
    #[error("feature vector length {got} does not match classifier input length {expected}")]
    ShapeMismatch {
        /// Input length the classifier was trained on
        expected: usize,
        /// Length of the vector actually supplied
        got: usize,
    },

    /// Socket or listener error while serving
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl AnalyzerError {
    /// Shorthand for an artifact validation failure
    pub fn artifact(message: impl Into<String>) -> Self {
        Self::Artifact(message.into())
    }
}

/// Result type for analyzer operations
pub type Result<T> = std::result::Result<T, AnalyzerError>;
