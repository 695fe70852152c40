//! Encoding-aware text chunking with cursor navigation
//!
//! A [`TextChunker`] splits a string into chunks of at most `size`
//! characters. Boundaries always fall between characters, so no chunk ever
//! holds a partial multi-byte sequence, and concatenating the chunks in
//! order gives back the original text. Navigation goes through the
//! [`Chunker`] trait: the cursor starts at the first chunk, moves forward
//! with [`Chunker::next`] and returns with [`Chunker::reset`]. Reads outside
//! the chunk sequence yield `None`.
//!
//! # Example
//!
//! ```rust
//! use textchunk_core::{Chunker, TextChunker};
//!
//! let mut chunker = TextChunker::new("héllo wörld", None, Some(4)).unwrap();
//! assert_eq!(chunker.count_chunks(), 3);
//! assert_eq!(chunker.current_chunk(), Some("héll"));
//! assert_eq!(chunker.next_chunk(), Some("o wö"));
//!
//! chunker.next();
//! assert_eq!(chunker.previous_chunk(), Some("héll"));
//! assert_eq!(chunker.index(), 1);
//!
//! chunker.reset();
//! assert_eq!(chunker.index(), 0);
//! ```

#![warn(missing_docs)]

pub mod chunker;
pub mod config;
pub mod encoding;
pub mod error;
pub mod segmentation;
pub mod traits;

// Re-export key types
pub use chunker::{Chunks, TextChunker};
pub use config::{ChunkerConfig, ChunkerConfigBuilder, DEFAULT_CHUNK_SIZE};
pub use encoding::TextEncoding;
pub use error::{ChunkError, Result};
pub use segmentation::Segmentation;
pub use traits::Chunker;
