//! # chunkwise
//!
//! Recursive, size-bounded text chunking for document-ingestion pipelines.
//!
//! ## The Problem
//!
//! Text extracted from a PDF is one long string. Embedding models and
//! retrievers want pieces of it: small enough to fit a context window, large
//! enough to mean something on their own.
//!
//! Cutting every 1000 characters is easy and ugly:
//!
//! - A word split in half embeds as noise
//! - A paragraph split mid-argument loses coherence
//! - A table row split across chunks is unreadable in both
//!
//! Better: cut at the largest natural boundary that still respects the size
//! limit, and only fall back to smaller boundaries when forced to.
//!
//! ## Recursive Splitting
//!
//! ```text
//! Separators: ["\n\n", "\n", " ", ""]
//!
//! 1. Split on "\n\n" (paragraphs), pack paragraphs into chunks
//! 2. A paragraph > max_chunk_size? Split it on "\n" (lines)
//! 3. A line still too big? Split on " " (words)
//! 4. A single word still too big? Hard cut on characters
//! ```
//!
//! See [`RecursiveChunker`] for the details: greedy packing, overlap, and
//! what happens to separators.
//!
//! ## Quick Start
//!
//! ```rust
//! use chunkwise::{Chunker, ChunkerConfig, RecursiveChunker};
//!
//! let text = "The quick brown fox jumps over the lazy dog.\n\n\
//!             Pack my box with five dozen liquor jugs.";
//!
//! // PDF preset: 1000 chars, no overlap, separators dropped
//! let chunker = RecursiveChunker::pdf();
//! let chunks = chunker.split(text);
//! assert_eq!(chunks.len(), 1);
//!
//! // Custom: 50 chars with 10 chars of overlap
//! let config = ChunkerConfig::new(50).with_overlap(10);
//! let chunker = RecursiveChunker::new(config, &["\n\n", "\n", " ", ""])?;
//! for slab in chunker.chunk(text) {
//!     assert_eq!(&text[slab.span()], slab.text);
//! }
//! # Ok::<(), chunkwise::Error>(())
//! ```
//!
//! ## Logging
//!
//! Chunking emits [`tracing`] events: one `debug` event per
//! [`Chunker::chunk`] call, `trace` events per recursion level. Nothing is
//! printed unless the application installs a subscriber.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`ChunkerConfig`], [`Measure`],
//!   and [`Slab`].

mod config;
mod error;
mod measure;
mod recursive;
mod slab;

pub use config::ChunkerConfig;
pub use error::{ConfigError, Error, Result};
pub use measure::Measure;
pub use recursive::{
    RecursiveChunker, DEFAULT_SEPARATORS, MARKDOWN_SEPARATORS, PROSE_SEPARATORS,
};
pub use slab::Slab;

/// A text chunking strategy.
///
/// Lets callers hold a chunker without naming its type:
///
/// ```rust
/// use chunkwise::{Chunker, RecursiveChunker, Slab};
///
/// fn chunk_page(chunker: &dyn Chunker, text: &str) -> Vec<Slab> {
///     chunker.chunk(text)
/// }
///
/// let slabs = chunk_page(&RecursiveChunker::pdf(), "Hello world. This is a test.");
/// assert_eq!(slabs.len(), 1);
/// ```
pub trait Chunker: Send + Sync {
    /// Split text into chunks.
    ///
    /// Each chunk is a [`Slab`] containing the text and its byte offsets
    /// in the original document.
    fn chunk(&self, text: &str) -> Vec<Slab>;

    /// Estimate the number of chunks for a given text length.
    ///
    /// Useful for pre-allocation. May be approximate.
    fn estimate_chunks(&self, text_len: usize) -> usize {
        // Conservative default
        (text_len / 500).max(1)
    }
}
