//! Error types for the splitter.
//!
//! `SplitterError` covers both the splitting core (numeral conversion) and
//! the outer surface (strategy selection, file loading, serialization).

use thiserror::Error;

/// Main error type for the splitter library.
#[derive(Debug, Error)]
pub enum SplitterError {
    /// Empty string or a character outside the Chinese numeral glyph set.
    #[error("Invalid Chinese numeral: '{0}'")]
    InvalidNumeral(String),

    /// Unknown split strategy name.
    #[error("Unsupported split strategy: '{0}'. Expected one of: legal, sentence, line")]
    UnsupportedStrategy(String),

    /// Chunk size and overlap do not form a usable window.
    #[error("Invalid chunk configuration: size {chunk_size}, overlap {chunk_overlap} (overlap must be smaller than a non-zero size)")]
    InvalidChunkConfig {
        chunk_size: usize,
        chunk_overlap: usize,
    },

    /// File type the loader cannot turn into a document.
    #[error("Unsupported document format: '{0}'")]
    UnsupportedFormat(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitterError>;
