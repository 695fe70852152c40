//! Chunk boundary computation
//!
//! Boundaries are only ever placed between characters, never inside one, so
//! every span is a valid `str` slice of the source text.

use std::num::NonZeroUsize;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// What counts as one character when measuring chunk size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Segmentation {
    /// One Unicode scalar value
    #[default]
    CodePoint,
    /// One extended grapheme cluster
    Grapheme,
}

/// Compute the byte span of every chunk in `text`
///
/// Each span holds exactly `size` characters except the last, which holds
/// the remainder. Empty text yields no spans.
pub fn chunk_spans(
    text: &str,
    size: NonZeroUsize,
    segmentation: Segmentation,
) -> Vec<Range<usize>> {
    match segmentation {
        Segmentation::CodePoint => {
            group_starts(text.char_indices().map(|(i, _)| i), text.len(), size)
        }
        Segmentation::Grapheme => group_starts(
            text.grapheme_indices(true).map(|(i, _)| i),
            text.len(),
            size,
        ),
    }
}

/// Count characters under the given segmentation
pub fn char_count(text: &str, segmentation: Segmentation) -> usize {
    match segmentation {
        Segmentation::CodePoint => text.chars().count(),
        Segmentation::Grapheme => text.graphemes(true).count(),
    }
}

/// Cut after every `size` character starts
fn group_starts<I>(starts: I, len: usize, size: NonZeroUsize) -> Vec<Range<usize>>
where
    I: Iterator<Item = usize>,
{
    let mut spans = Vec::with_capacity(len / size.get() + 1);
    let mut chunk_start = 0;

    for (n, start) in starts.enumerate() {
        if n > 0 && n % size.get() == 0 {
            spans.push(chunk_start..start);
            chunk_start = start;
        }
    }

    if chunk_start < len {
        spans.push(chunk_start..len);
    }

    spans
}
