//! Text chunker
//!
//! Splits an in-memory string into chunks of a fixed number of characters
//! and walks them with a cursor. Boundaries are computed once, when the
//! chunker is built; afterwards only the cursor moves.

use crate::{
    config::{ChunkerConfig, DEFAULT_CHUNK_SIZE},
    encoding::TextEncoding,
    error::Result,
    segmentation::{chunk_spans, Segmentation},
    traits::Chunker,
};
use std::borrow::Cow;
use std::iter::FusedIterator;
use std::num::NonZeroUsize;
use std::ops::Range;
use std::slice;
use tracing::{debug, warn};

/// Chunker over an owned string
#[derive(Debug, Clone)]
pub struct TextChunker {
    text: String,
    encoding: TextEncoding,
    size: NonZeroUsize,
    segmentation: Segmentation,
    /// Byte span of every chunk, in order
    spans: Box<[Range<usize>]>,
    index: usize,
}

impl TextChunker {
    /// Create a chunker
    ///
    /// `None` selects UTF-8 and a size of [`DEFAULT_CHUNK_SIZE`] characters.
    ///
    /// # Errors
    /// [`ChunkError::InvalidEncoding`](crate::ChunkError::InvalidEncoding) for
    /// an unknown encoding label and
    /// [`ChunkError::InvalidChunkSize`](crate::ChunkError::InvalidChunkSize)
    /// when `size` is zero or negative.
    pub fn new(
        text: impl Into<String>,
        encoding: Option<&str>,
        size: Option<i64>,
    ) -> Result<Self> {
        let config = ChunkerConfig {
            encoding: encoding.map(str::to_string),
            size: size.unwrap_or(DEFAULT_CHUNK_SIZE),
            ..Default::default()
        };
        Self::with_config(text, &config)
    }

    /// Create a chunker from a configuration
    ///
    /// # Errors
    /// [`ChunkError::InvalidEncoding`](crate::ChunkError::InvalidEncoding) when
    /// `config.encoding` is an unknown label and
    /// [`ChunkError::InvalidChunkSize`](crate::ChunkError::InvalidChunkSize)
    /// when `config.size` is zero or negative.
    pub fn with_config(text: impl Into<String>, config: &ChunkerConfig) -> Result<Self> {
        let (encoding, size) = validate(config)?;
        Ok(Self::build(text.into(), encoding, size, config.segmentation))
    }

    /// Decode `bytes` under the given encoding and chunk the result
    ///
    /// # Errors
    /// In addition to the errors of [`TextChunker::new`],
    /// [`ChunkError::MalformedInput`](crate::ChunkError::MalformedInput) when
    /// `bytes` is not valid in the encoding.
    pub fn from_bytes(
        bytes: &[u8],
        encoding: Option<&str>,
        size: Option<i64>,
    ) -> Result<Self> {
        let config = ChunkerConfig {
            encoding: encoding.map(str::to_string),
            size: size.unwrap_or(DEFAULT_CHUNK_SIZE),
            ..Default::default()
        };
        Self::from_bytes_with_config(bytes, &config)
    }

    /// Decode `bytes` and chunk the result using a configuration
    ///
    /// # Errors
    /// In addition to the errors of [`TextChunker::with_config`],
    /// [`ChunkError::MalformedInput`](crate::ChunkError::MalformedInput) when
    /// `bytes` is not valid in the configured encoding.
    pub fn from_bytes_with_config(bytes: &[u8], config: &ChunkerConfig) -> Result<Self> {
        let (encoding, size) = validate(config)?;
        let text = encoding.decode(bytes).inspect_err(|e| {
            warn!(error = %e, bytes = bytes.len(), "rejected malformed input");
        })?;
        Ok(Self::build(
            text.into_owned(),
            encoding,
            size,
            config.segmentation,
        ))
    }

    fn build(
        text: String,
        encoding: TextEncoding,
        size: NonZeroUsize,
        segmentation: Segmentation,
    ) -> Self {
        let spans = chunk_spans(&text, size, segmentation).into_boxed_slice();

        debug!(
            encoding = encoding.name(),
            size = size.get(),
            ?segmentation,
            bytes = text.len(),
            chunks = spans.len(),
            "built chunker"
        );

        Self {
            text,
            encoding,
            size,
            segmentation,
            spans,
            index: 0,
        }
    }

    /// The source text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The resolved encoding
    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Characters per chunk
    pub fn size(&self) -> usize {
        self.size.get()
    }

    /// Character segmentation rule
    pub fn segmentation(&self) -> Segmentation {
        self.segmentation
    }

    /// Byte span of every chunk within [`TextChunker::text`]
    pub fn spans(&self) -> &[Range<usize>] {
        &self.spans
    }

    /// Iterate all chunks in order, independent of the cursor
    pub fn chunks(&self) -> Chunks<'_> {
        Chunks {
            text: &self.text,
            spans: self.spans.iter(),
        }
    }

    /// Encode a chunk into the configured encoding
    ///
    /// UTF-16 encodings produce UTF-8 bytes instead. Check
    /// [`TextEncoding::output_name`] to see which encoding the bytes are in.
    pub fn encode_chunk<'a>(&self, chunk: &'a str) -> Cow<'a, [u8]> {
        self.encoding.encode(chunk)
    }

    /// The chunk under the cursor, encoded into the configured encoding
    ///
    /// Same output encoding rule as [`TextChunker::encode_chunk`].
    pub fn encoded_current_chunk(&self) -> Option<Cow<'_, [u8]>> {
        self.current_chunk().map(|chunk| self.encode_chunk(chunk))
    }
}

fn validate(config: &ChunkerConfig) -> Result<(TextEncoding, NonZeroUsize)> {
    config.validate().inspect_err(|e| {
        warn!(error = %e, "rejected chunker configuration");
    })
}

impl Chunker for TextChunker {
    fn chunk_at(&self, index: usize) -> Option<&str> {
        self.spans.get(index).map(|span| &self.text[span.clone()])
    }

    fn count_chunks(&self) -> usize {
        self.spans.len()
    }

    fn index(&self) -> usize {
        self.index
    }

    fn next(&mut self) {
        self.index = self.index.saturating_add(1);
    }

    fn reset(&mut self) {
        self.index = 0;
    }
}

impl<'a> IntoIterator for &'a TextChunker {
    type Item = &'a str;
    type IntoIter = Chunks<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks()
    }
}

/// Iterator over the chunks of a [`TextChunker`]
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    text: &'a str,
    spans: slice::Iter<'a, Range<usize>>,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.spans.next().map(|span| &self.text[span.clone()])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.spans.size_hint()
    }
}

impl DoubleEndedIterator for Chunks<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.spans.next_back().map(|span| &self.text[span.clone()])
    }
}

impl ExactSizeIterator for Chunks<'_> {}

impl FusedIterator for Chunks<'_> {}
