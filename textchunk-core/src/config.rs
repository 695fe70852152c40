//! Chunker configuration

use crate::{
    encoding::TextEncoding,
    error::{ChunkError, Result},
    segmentation::Segmentation,
};
use std::num::NonZeroUsize;

/// Characters per chunk when no size is given
pub const DEFAULT_CHUNK_SIZE: i64 = 2000;

/// Chunker configuration
///
/// Holds the raw, caller-supplied settings. Nothing is validated until the
/// configuration is built or handed to a chunker.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChunkerConfig {
    /// Encoding label (None = UTF-8)
    pub encoding: Option<String>,
    /// Characters per chunk
    pub size: i64,
    /// Character segmentation rule
    pub segmentation: Segmentation,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            encoding: None,
            size: DEFAULT_CHUNK_SIZE,
            segmentation: Segmentation::default(),
        }
    }
}

impl ChunkerConfig {
    /// Create a builder
    pub fn builder() -> ChunkerConfigBuilder {
        ChunkerConfigBuilder::default()
    }

    /// Parse a configuration from TOML
    ///
    /// Missing keys take their defaults. The result is validated.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ChunkerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check encoding and size, returning their resolved forms
    pub(crate) fn validate(&self) -> Result<(TextEncoding, NonZeroUsize)> {
        let encoding = TextEncoding::resolve(self.encoding.as_deref())?;
        let size = validate_size(self.size)?;
        Ok((encoding, size))
    }
}

/// Reject zero and negative sizes
pub(crate) fn validate_size(size: i64) -> Result<NonZeroUsize> {
    if size <= 0 {
        return Err(ChunkError::InvalidChunkSize { size });
    }

    // Sizes beyond the address space cannot be reached by any text
    let size = usize::try_from(size).unwrap_or(usize::MAX);
    NonZeroUsize::new(size).ok_or(ChunkError::InvalidChunkSize { size: 0 })
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ChunkerConfigBuilder {
    config: ChunkerConfig,
}

impl ChunkerConfigBuilder {
    /// Set the encoding label
    pub fn encoding(mut self, label: impl Into<String>) -> Self {
        self.config.encoding = Some(label.into());
        self
    }

    /// Set characters per chunk
    pub fn size(mut self, size: i64) -> Self {
        self.config.size = size;
        self
    }

    /// Set the segmentation rule
    pub fn segmentation(mut self, segmentation: Segmentation) -> Self {
        self.config.segmentation = segmentation;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ChunkerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
