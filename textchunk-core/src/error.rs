//! Error types for chunker construction

use thiserror::Error;

/// Errors raised while building a chunker
///
/// Every variant is a construction failure. Navigation never errors; it
/// reports a missing chunk as `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    /// Encoding label is not in the supported set
    #[error("encoding '{label}' not supported")]
    InvalidEncoding {
        /// The label as given by the caller
        label: String,
    },

    /// Chunk size is zero or negative
    #[error("chunk size must be a positive integer, got {size}")]
    InvalidChunkSize {
        /// The rejected size
        size: i64,
    },

    /// Byte input is not valid under the configured encoding
    #[error("input is not valid {encoding}")]
    MalformedInput {
        /// Canonical name of the encoding used for decoding
        encoding: &'static str,
    },

    /// Configuration could not be parsed
    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(feature = "serde")]
impl From<toml::de::Error> for ChunkError {
    fn from(err: toml::de::Error) -> Self {
        ChunkError::Config(err.to_string())
    }
}

/// Result type for chunker operations
pub type Result<T> = std::result::Result<T, ChunkError>;
