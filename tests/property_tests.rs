//! Property-based tests for recursive chunking.
//!
//! These tests verify that chunking maintains key invariants:
//! - Fit: input within the limit comes back as one chunk, untouched
//! - Bounds: every chunk fits and its offsets slice back to its text
//! - Ordered: chunks are in source order
//! - Coverage: nothing but separators is ever lost
//! - Overlap: adjacent chunks share at most `overlap` units

use chunkwise::{Chunker, ChunkerConfig, Measure, RecursiveChunker, Slab};
use proptest::prelude::*;

const SEPARATORS: &[&str] = &["\n\n", "\n", " "];

// =============================================================================
// Test Generators
// =============================================================================

/// Generate arbitrary text (no newlines)
fn arbitrary_text() -> impl Strategy<Value = String> {
    prop::string::string_regex(".{10,500}").unwrap()
}

/// Generate text with words, lines, and paragraphs
fn document_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (
            prop::string::string_regex("[A-Za-zéß日本]{1,25}").unwrap(),
            prop::sample::select(vec![" ", " ", " ", "\n", "\n\n", "  "]),
        ),
        1..120,
    )
    .prop_map(|words| {
        words
            .into_iter()
            .map(|(word, sep)| format!("{word}{sep}"))
            .collect()
    })
}

fn chunker(config: ChunkerConfig) -> RecursiveChunker {
    RecursiveChunker::new(config, SEPARATORS).unwrap()
}

// =============================================================================
// Invariant Helpers
// =============================================================================

fn chunks_ordered(slabs: &[Slab]) -> bool {
    slabs
        .windows(2)
        .all(|w| w[0].start <= w[1].start && w[0].end < w[1].end)
}

fn chunk_text_matches(slabs: &[Slab], text: &str) -> bool {
    slabs
        .iter()
        .enumerate()
        .all(|(i, slab)| slab.index == i && slab.end <= text.len() && text[slab.span()] == slab.text)
}

/// Bytes no chunk covers.
fn uncovered(slabs: &[Slab], text: &str) -> String {
    let mut covered = vec![false; text.len()];
    for slab in slabs {
        for flag in &mut covered[slab.span()] {
            *flag = true;
        }
    }
    text.char_indices()
        .filter(|(i, _)| !covered[*i])
        .map(|(_, c)| c)
        .collect()
}

/// Concatenate chunks with each one clipped to start where the previous ended.
fn without_overlap(slabs: &[Slab], text: &str) -> String {
    let mut out = String::new();
    let mut end = 0;
    for slab in slabs {
        let start = slab.start.max(end);
        out.push_str(&text[start..slab.end]);
        end = slab.end;
    }
    out
}

// =============================================================================
// Fit and size
// =============================================================================

proptest! {
    #[test]
    fn text_within_limit_is_one_chunk(text in arbitrary_text()) {
        let chunker = chunker(ChunkerConfig::new(500));
        prop_assert_eq!(chunker.split(&text), vec![text.clone()]);
    }

    #[test]
    fn every_chunk_fits(
        text in document_text(),
        size in 5usize..200,
        overlap in 0usize..50,
    ) {
        let chunker = chunker(ChunkerConfig::new(size).with_overlap(overlap.min(size - 1)));
        for chunk in chunker.split(&text) {
            prop_assert!(!chunk.is_empty());
            prop_assert!(
                chunk.chars().count() <= size,
                "Chunk size {} exceeds max {}",
                chunk.chars().count(),
                size
            );
        }
    }

    #[test]
    fn rechunking_a_chunk_is_identity(text in document_text(), size in 5usize..100) {
        let chunker = chunker(ChunkerConfig::new(size));
        for chunk in chunker.split(&text) {
            prop_assert_eq!(chunker.split(&chunk), vec![chunk.clone()]);
        }
    }
}

// =============================================================================
// Offsets and order
// =============================================================================

proptest! {
    #[test]
    fn chunks_ordered_and_match(
        text in document_text(),
        size in 5usize..200,
        overlap in 0usize..50,
        keep in any::<bool>(),
    ) {
        let config = ChunkerConfig::new(size)
            .with_overlap(overlap.min(size - 1))
            .with_keep_separator(keep);
        let slabs = chunker(config).chunk(&text);
        prop_assert!(chunks_ordered(&slabs));
        prop_assert!(chunk_text_matches(&slabs, &text));
    }

    #[test]
    fn arbitrary_unicode_offsets_valid(text in arbitrary_text(), size in 1usize..60) {
        for measure in [Measure::Chars, Measure::Bytes, Measure::Graphemes] {
            let slabs = chunker(ChunkerConfig::new(size).with_measure(measure)).chunk(&text);
            prop_assert!(chunks_ordered(&slabs));
            prop_assert!(chunk_text_matches(&slabs, &text));
        }
    }

    #[test]
    fn bytes_measure_never_exceeds_limit(text in arbitrary_text(), size in 4usize..60) {
        let slabs = chunker(ChunkerConfig::new(size).with_measure(Measure::Bytes)).chunk(&text);
        for slab in &slabs {
            prop_assert!(slab.len() <= size);
        }
    }
}

// =============================================================================
// Coverage and overlap
// =============================================================================

proptest! {
    #[test]
    fn kept_separators_reconstruct_input(
        text in document_text(),
        size in 5usize..200,
        overlap in 0usize..50,
    ) {
        let config = ChunkerConfig::new(size)
            .with_overlap(overlap.min(size - 1))
            .with_keep_separator(true);
        let slabs = chunker(config).chunk(&text);
        prop_assert_eq!(without_overlap(&slabs, &text), text);
    }

    #[test]
    fn dropped_text_is_only_separators(text in document_text(), size in 5usize..200) {
        let slabs = chunker(ChunkerConfig::new(size)).chunk(&text);
        let lost = uncovered(&slabs, &text);
        prop_assert!(
            lost.chars().all(|c| c == ' ' || c == '\n'),
            "lost non-separator text: {:?}",
            lost
        );
    }

    #[test]
    fn no_overlap_means_disjoint(text in document_text(), size in 5usize..200) {
        let slabs = chunker(ChunkerConfig::new(size)).chunk(&text);
        for w in slabs.windows(2) {
            prop_assert!(w[1].start >= w[0].end);
        }
    }

    #[test]
    fn overlap_bounded(text in document_text(), size in 10usize..200, overlap in 1usize..10) {
        let slabs = chunker(ChunkerConfig::new(size).with_overlap(overlap)).chunk(&text);
        for w in slabs.windows(2) {
            if w[1].start < w[0].end {
                let shared = text[w[1].start..w[0].end].chars().count();
                prop_assert!(shared <= overlap, "shared {} > overlap {}", shared, overlap);
            }
        }
    }
}

// =============================================================================
// Edge Cases
// =============================================================================

#[test]
fn empty_input_produces_empty_output() {
    let chunker = RecursiveChunker::pdf();
    assert!(chunker.split("").is_empty());
    assert!(chunker.chunk("").is_empty());
}

#[test]
fn very_long_word() {
    let text = "a".repeat(1000);
    let chunker = RecursiveChunker::new(ChunkerConfig::new(100), &["\n\n", " ", ""]).unwrap();
    let chunks = chunker.split(&text);

    assert_eq!(chunks.len(), 10);
    assert!(chunks.iter().all(|c| c.len() == 100));
}

#[test]
fn chunking_is_deterministic() {
    let text = "The quick brown fox jumps over the lazy dog. Pack my box.";
    let chunker = RecursiveChunker::new(ChunkerConfig::new(20).with_overlap(5), SEPARATORS).unwrap();

    assert_eq!(chunker.chunk(text), chunker.chunk(text));
}
