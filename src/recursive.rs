//! Recursive character splitting.
//!
//! Tries progressively finer separators until chunks fit within the size limit.
//!
//! ## The Algorithm
//!
//! Given separators `["\n\n", "\n", " ", ""]` and max size `100`:
//!
//! ```text
//! 1. Text fits in 100? Return it as-is.
//! 2. Split on the first separator that occurs in the text ("\n\n")
//! 3. Pack segments left to right while the packed text still fits;
//!    emit the chunk when the next segment would overflow it
//! 4. A segment that alone is > 100:
//!    - emit what's packed so far
//!    - split that segment from the next separator down ("\n", " ", ...)
//! 5. "" (or running out of separators) means hard cut every 100 units
//! ```
//!
//! Chunks are always contiguous slices of the input. When separators are
//! dropped (the default), they only disappear at chunk boundaries; a chunk
//! holding several segments keeps the separators between them.
//!
//! ## Overlap
//!
//! With `overlap > 0`, a chunk emitted during packing seeds the next one with
//! its trailing `overlap` units. The seed shrinks when seed plus next segment
//! would not fit. Hard cuts never overlap, and no seed is carried into or out
//! of a segment that had to be split further down.
//!
//! ```text
//! max = 10, overlap = 3, separators = [" "]
//!
//! "the quick brown fox"
//! Chunk 0: "the quick"   [0..9]
//! Chunk 1: "ick brown"   [6..15]   <- "ick" repeated
//! Chunk 2: "own fox"     [12..19]  <- "own" repeated
//! ```
//!
//! ## Separator Presets
//!
//! | Preset | Separators |
//! |--------|------------|
//! | [`DEFAULT_SEPARATORS`] | `"\n\n"`, `"\n"`, `" "`, `""` |
//! | [`PROSE_SEPARATORS`] | `"\n\n"`, `"\n"`, `". "`, `" "` |
//! | [`MARKDOWN_SEPARATORS`] | `"\n## "`, `"\n### "`, `"\n\n"`, `"\n"`, `". "`, `" "` |

use std::ops::Range;

use tracing::{debug, trace};

use crate::{Chunker, ChunkerConfig, Result, Slab};

/// Paragraphs, lines, words, then characters.
pub const DEFAULT_SEPARATORS: &[&str] = &["\n\n", "\n", " ", ""];

/// Paragraphs, lines, sentences, words.
pub const PROSE_SEPARATORS: &[&str] = &["\n\n", "\n", ". ", " "];

/// Markdown sections before paragraphs, lines, sentences, words.
pub const MARKDOWN_SEPARATORS: &[&str] = &["\n## ", "\n### ", "\n\n", "\n", ". ", " "];

/// Recursive character splitter.
///
/// Splits text using a hierarchy of separators, trying the coarsest first.
/// Holds no state between calls; share one across threads freely.
///
/// ## Example
///
/// ```rust
/// use chunkwise::{ChunkerConfig, RecursiveChunker};
///
/// let chunker = RecursiveChunker::new(ChunkerConfig::new(10), &[" "])?;
/// assert_eq!(chunker.split("the quick brown fox"), ["the quick", "brown fox"]);
/// # Ok::<(), chunkwise::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct RecursiveChunker {
    config: ChunkerConfig,
    separators: Vec<String>,
}

impl RecursiveChunker {
    /// Create a new recursive chunker.
    ///
    /// # Arguments
    ///
    /// * `config` - Size, overlap, and separator handling
    /// * `separators` - Hierarchy of separators, coarsest first. `""` means a
    ///   hard cut; an empty list hard-cuts everything.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`](crate::Error::InvalidConfig) if
    /// `config` fails [`ChunkerConfig::validate`].
    pub fn new(config: ChunkerConfig, separators: &[&str]) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, separators))
    }

    /// The PDF preset: [`ChunkerConfig::PDF`] with [`DEFAULT_SEPARATORS`].
    #[must_use]
    pub fn pdf() -> Self {
        Self::from_parts(ChunkerConfig::PDF, DEFAULT_SEPARATORS)
    }

    /// Create a chunker with default separators for prose.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_size == 0`.
    pub fn prose(max_size: usize) -> Result<Self> {
        Self::new(ChunkerConfig::new(max_size), PROSE_SEPARATORS)
    }

    /// Create a chunker with default separators for Markdown.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_size == 0`.
    pub fn markdown(max_size: usize) -> Result<Self> {
        Self::new(ChunkerConfig::new(max_size), MARKDOWN_SEPARATORS)
    }

    // Callers guarantee `config` is valid.
    fn from_parts(config: ChunkerConfig, separators: &[&str]) -> Self {
        Self {
            config,
            separators: separators.iter().map(|&s| s.to_string()).collect(),
        }
    }

    /// The configuration this chunker was built with.
    #[must_use]
    pub const fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// The separator hierarchy, coarsest first.
    #[must_use]
    pub fn separators(&self) -> &[String] {
        &self.separators
    }

    /// Split text into chunk strings, in document order.
    ///
    /// Use [`Chunker::chunk`] to also get each chunk's offsets.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<String> {
        self.spans(text)
            .into_iter()
            .map(|span| text[span].to_string())
            .collect()
    }

    /// Byte spans of every chunk.
    fn spans(&self, text: &str) -> Vec<Range<usize>> {
        if text.is_empty() {
            return vec![];
        }
        let mut out = Vec::with_capacity(self.estimate_chunks(text.len()));
        self.split_span(text, 0..text.len(), 0, &mut out);
        out
    }

    fn fits(&self, piece: &str) -> bool {
        self.config.measure().size(piece) <= self.config.max_chunk_size()
    }

    /// Recursively split `text[span]`, starting at separator `level`.
    fn split_span(
        &self,
        text: &str,
        span: Range<usize>,
        level: usize,
        out: &mut Vec<Range<usize>>,
    ) {
        let piece = &text[span.clone()];
        if piece.is_empty() {
            return;
        }
        if self.fits(piece) {
            out.push(span);
            return;
        }

        let next = self
            .separators
            .iter()
            .enumerate()
            .skip(level)
            .find(|(_, sep)| sep.is_empty() || piece.contains(sep.as_str()));

        match next {
            Some((level, sep)) if !sep.is_empty() => {
                let segments = self.segments(piece, sep, span.start);
                trace!(
                    level,
                    separator = ?sep,
                    segments = segments.len(),
                    "splitting on separator"
                );
                self.merge(text, &segments, level, out);
            }
            _ => {
                trace!(bytes = piece.len(), "no separator left, hard-cutting");
                self.hard_cut(text, span, out);
            }
        }
    }

    /// Split `piece` at every `sep`, as spans offset by `base`.
    ///
    /// Kept separators stay on the segment before them; dropped ones leave
    /// gaps, and empty segments are skipped.
    fn segments(&self, piece: &str, sep: &str, base: usize) -> Vec<Range<usize>> {
        let keep = self.config.keep_separator();
        let mut segments = Vec::new();
        let mut start = 0;

        for (pos, _) in piece.match_indices(sep) {
            let end = if keep { pos + sep.len() } else { pos };
            if end > start {
                segments.push(base + start..base + end);
            }
            start = pos + sep.len();
        }
        if start < piece.len() {
            segments.push(base + start..base + piece.len());
        }

        segments
    }

    /// Greedily pack segments into chunks, recursing into oversized ones.
    fn merge(
        &self,
        text: &str,
        segments: &[Range<usize>],
        level: usize,
        out: &mut Vec<Range<usize>>,
    ) {
        let mut current: Option<Range<usize>> = None;

        for segment in segments {
            if !self.fits(&text[segment.clone()]) {
                if let Some(packed) = current.take() {
                    out.push(packed);
                }
                self.split_span(text, segment.clone(), level + 1, out);
                continue;
            }

            current = Some(match current.take() {
                None => segment.clone(),
                Some(packed) if self.fits(&text[packed.start..segment.end]) => {
                    packed.start..segment.end
                }
                Some(packed) => {
                    let start = self.overlap_start(text, &packed, segment);
                    out.push(packed);
                    start..segment.end
                }
            });
        }

        if let Some(packed) = current {
            out.push(packed);
        }
    }

    /// Where the chunk after `emitted` starts, given it must reach `next.end`.
    fn overlap_start(&self, text: &str, emitted: &Range<usize>, next: &Range<usize>) -> usize {
        let measure = self.config.measure();
        let chunk = &text[emitted.clone()];
        let mut count = self.config.overlap().min(measure.size(chunk));

        while count > 0 {
            let start = emitted.start + measure.suffix_start(chunk, count);
            if self.fits(&text[start..next.end]) {
                return start;
            }
            count -= 1;
        }

        next.start
    }

    /// Cut at every `max_chunk_size` units, no overlap.
    fn hard_cut(&self, text: &str, span: Range<usize>, out: &mut Vec<Range<usize>>) {
        let measure = self.config.measure();
        let mut start = span.start;

        while start < span.end {
            let rest = &text[start..span.end];
            let end = start + measure.prefix_end(rest, self.config.max_chunk_size());
            out.push(start..end);
            start = end;
        }
    }
}

impl Default for RecursiveChunker {
    fn default() -> Self {
        Self::from_parts(ChunkerConfig::DEFAULT, DEFAULT_SEPARATORS)
    }
}

impl Chunker for RecursiveChunker {
    fn chunk(&self, text: &str) -> Vec<Slab> {
        let slabs: Vec<Slab> = self
            .spans(text)
            .into_iter()
            .enumerate()
            .map(|(index, span)| Slab::new(&text[span.clone()], span.start, span.end, index))
            .collect();

        debug!(
            bytes = text.len(),
            chunks = slabs.len(),
            max_chunk_size = self.config.max_chunk_size(),
            "chunked text"
        );

        slabs
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        text_len.div_ceil(self.config.max_chunk_size())
    }
}
