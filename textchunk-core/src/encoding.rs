//! Encoding resolution
//!
//! Encoding labels follow the WHATWG Encoding Standard as implemented by
//! `encoding_rs`. Labels are matched case-insensitively and surrounding
//! whitespace is ignored, so `" UTF8 "` and `"utf-8"` resolve identically.

use crate::error::{ChunkError, Result};
use encoding_rs::{Encoding, UTF_8};
use std::borrow::Cow;
use std::fmt;

/// A validated text encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding {
    inner: &'static Encoding,
}

impl TextEncoding {
    /// UTF-8, used whenever no encoding is given
    pub fn utf8() -> Self {
        Self { inner: UTF_8 }
    }

    /// Resolve an encoding label
    ///
    /// The "replacement" pseudo-encoding is rejected along with any label
    /// the standard does not know.
    pub fn for_label(label: &str) -> Result<Self> {
        Encoding::for_label_no_replacement(label.as_bytes())
            .map(|inner| Self { inner })
            .ok_or_else(|| ChunkError::InvalidEncoding {
                label: label.to_string(),
            })
    }

    /// Resolve an optional label, falling back to UTF-8
    pub fn resolve(label: Option<&str>) -> Result<Self> {
        match label {
            Some(label) => Self::for_label(label),
            None => Ok(Self::default()),
        }
    }

    /// Canonical name, e.g. `"UTF-8"` or `"windows-1252"`
    pub fn name(&self) -> &'static str {
        self.inner.name()
    }

    /// Name of the encoding [`TextEncoding::encode`] actually produces
    ///
    /// Same as [`TextEncoding::name`] except for UTF-16 variants, which
    /// output UTF-8.
    pub fn output_name(&self) -> &'static str {
        self.inner.output_encoding().name()
    }

    /// Whether every character occupies exactly one byte
    pub fn is_single_byte(&self) -> bool {
        self.inner.is_single_byte()
    }

    /// Decode bytes without inserting replacement characters
    ///
    /// A byte order mark is treated as ordinary content.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, str>> {
        self.inner
            .decode_without_bom_handling_and_without_replacement(bytes)
            .ok_or(ChunkError::MalformedInput {
                encoding: self.name(),
            })
    }

    /// Encode a chunk into this encoding
    ///
    /// Unmappable characters become HTML numeric character references.
    /// UTF-16 variants encode as UTF-8; see [`TextEncoding::output_name`].
    pub fn encode<'a>(&self, chunk: &'a str) -> Cow<'a, [u8]> {
        let (bytes, _, _) = self.inner.encode(chunk);
        bytes
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self::utf8()
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
