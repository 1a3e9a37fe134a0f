//! Chunker configuration.
//!
//! Configuration is a plain value, validated once when a chunker is built and
//! immutable afterwards. Presets are named constants rather than global
//! state, so a chunker for PDFs and one for Markdown never share settings by
//! accident:
//!
//! ```rust
//! use chunkwise::{ChunkerConfig, Measure};
//!
//! // Text extracted from PDFs: 1000 chars, no overlap, drop separators
//! let pdf = ChunkerConfig::PDF;
//! assert_eq!(pdf.max_chunk_size(), 1000);
//!
//! // Something custom
//! let config = ChunkerConfig::default()
//!     .with_max_chunk_size(512)
//!     .with_overlap(64)
//!     .with_measure(Measure::Graphemes);
//! assert!(config.validate().is_ok());
//! ```

use crate::error::{ConfigError, Result};
use crate::Measure;

/// Size, overlap, and separator handling for a chunker.
///
/// With the `serde` feature the config (de)serializes with every field
/// optional, so a pipeline config file only needs to name what it changes:
///
/// ```json
/// { "max_chunk_size": 800, "measure": "graphemes" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChunkerConfig {
    max_chunk_size: usize,
    overlap: usize,
    keep_separator: bool,
    measure: Measure,
}

impl ChunkerConfig {
    /// 1000 characters, no overlap, separators dropped.
    pub const DEFAULT: Self = Self {
        max_chunk_size: 1000,
        overlap: 0,
        keep_separator: false,
        measure: Measure::Chars,
    };

    /// Preset for text extracted from PDF files.
    pub const PDF: Self = Self::DEFAULT;

    /// Create a config with the given max chunk size and default everything else.
    #[must_use]
    pub const fn new(max_chunk_size: usize) -> Self {
        Self {
            max_chunk_size,
            ..Self::DEFAULT
        }
    }

    /// Set the max chunk size.
    #[must_use]
    pub const fn with_max_chunk_size(mut self, max_chunk_size: usize) -> Self {
        self.max_chunk_size = max_chunk_size;
        self
    }

    /// Set how many trailing units of a chunk are repeated at the start of the next.
    #[must_use]
    pub const fn with_overlap(mut self, overlap: usize) -> Self {
        self.overlap = overlap;
        self
    }

    /// Keep separators in the output (attached to the preceding text).
    #[must_use]
    pub const fn with_keep_separator(mut self, keep_separator: bool) -> Self {
        self.keep_separator = keep_separator;
        self
    }

    /// Set the unit sizes are counted in.
    #[must_use]
    pub const fn with_measure(mut self, measure: Measure) -> Self {
        self.measure = measure;
        self
    }

    /// Maximum chunk size, in [`measure`](Self::measure) units.
    #[must_use]
    pub const fn max_chunk_size(&self) -> usize {
        self.max_chunk_size
    }

    /// Overlap between packed chunks, in [`measure`](Self::measure) units.
    #[must_use]
    pub const fn overlap(&self) -> usize {
        self.overlap
    }

    /// Whether separators are kept in the output.
    #[must_use]
    pub const fn keep_separator(&self) -> bool {
        self.keep_separator
    }

    /// The unit sizes are counted in.
    #[must_use]
    pub const fn measure(&self) -> Measure {
        self.measure
    }

    /// Check the config is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`](crate::Error::InvalidConfig) if the
    /// max chunk size is zero or the overlap is not smaller than it.
    pub fn validate(&self) -> Result<()> {
        if self.max_chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize.into());
        }
        if self.overlap >= self.max_chunk_size {
            return Err(ConfigError::OverlapExceedsSize {
                size: self.max_chunk_size,
                overlap: self.overlap,
            }
            .into());
        }
        Ok(())
    }
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
