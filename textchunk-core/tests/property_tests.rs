//! Property tests for chunk boundaries and cursor behaviour

use proptest::prelude::*;
use textchunk_core::segmentation::char_count;
use textchunk_core::{Chunker, ChunkerConfig, Segmentation, TextChunker};

fn chunker(text: &str, size: i64) -> TextChunker {
    TextChunker::new(text, None, Some(size)).unwrap()
}

proptest! {
    #[test]
    fn code_point_count_is_ceiling(text in "\\PC*", size in 1i64..16) {
        let chunker = chunker(&text, size);
        let chars = char_count(&text, Segmentation::CodePoint);
        prop_assert_eq!(chars, text.chars().count());
        prop_assert_eq!(chunker.count_chunks(), chars.div_ceil(size as usize));
    }

    #[test]
    fn grapheme_count_is_ceiling_of_cluster_length(text in "\\PC*", size in 1i64..8) {
        let config = ChunkerConfig::builder()
            .size(size)
            .segmentation(Segmentation::Grapheme)
            .build()
            .unwrap();
        let chunker = TextChunker::with_config(text.clone(), &config).unwrap();
        let clusters = char_count(&text, Segmentation::Grapheme);
        prop_assert_eq!(chunker.count_chunks(), clusters.div_ceil(size as usize));
    }

    #[test]
    fn concatenation_reproduces_text(text in "\\PC*", size in 1i64..16) {
        let chunker = chunker(&text, size);
        prop_assert_eq!(chunker.chunks().collect::<String>(), text);
    }

    #[test]
    fn chunks_hold_exactly_size_chars_except_last(text in "\\PC+", size in 1i64..16) {
        let chunker = chunker(&text, size);
        let counts: Vec<usize> = chunker.chunks().map(|c| c.chars().count()).collect();
        let (last, rest) = counts.split_last().unwrap();
        prop_assert!(rest.iter().all(|&n| n == size as usize));
        prop_assert!(*last >= 1 && *last <= size as usize);
    }

    #[test]
    fn boundaries_fall_on_char_boundaries(text in "\\PC*", size in 1i64..16) {
        let chunker = chunker(&text, size);
        for span in chunker.spans() {
            prop_assert!(text.is_char_boundary(span.start));
            prop_assert!(text.is_char_boundary(span.end));
        }
    }

    #[test]
    fn grapheme_concatenation_reproduces_text(text in "\\PC*", size in 1i64..8) {
        let config = ChunkerConfig::builder()
            .size(size)
            .segmentation(Segmentation::Grapheme)
            .build()
            .unwrap();
        let chunker = TextChunker::with_config(text.clone(), &config).unwrap();
        prop_assert_eq!(chunker.chunks().collect::<String>(), text);
    }

    #[test]
    fn has_predicates_follow_count(text in "\\PC{0,8}", size in 1i64..4) {
        let chunker = chunker(&text, size);
        prop_assert_eq!(chunker.has_chunk(), chunker.count_chunks() == 1);
        prop_assert_eq!(chunker.has_chunks(), chunker.count_chunks() >= 1);
    }

    #[test]
    fn peeks_never_move_and_reset_returns_to_zero(
        text in "\\PC*",
        size in 1i64..8,
        steps in 0usize..20,
    ) {
        let mut chunker = chunker(&text, size);
        for _ in 0..steps {
            chunker.next();
        }
        prop_assert_eq!(chunker.index(), steps);

        let _ = chunker.next_chunk();
        let _ = chunker.previous_chunk();
        prop_assert_eq!(chunker.index(), steps);
        prop_assert_eq!(chunker.current_chunk(), chunker.chunk_at(steps));

        chunker.reset();
        prop_assert_eq!(chunker.index(), 0);
    }

    #[test]
    fn non_positive_sizes_are_rejected(size in i64::MIN..=0) {
        prop_assert!(TextChunker::new("foo", None, Some(size)).is_err());
    }
}
