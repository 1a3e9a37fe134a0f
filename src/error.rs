//! Error types for chunkwise.

/// Errors that can occur when building a chunker.
///
/// Splitting itself never fails; every error is raised at construction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The chunker configuration is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Why a [`ChunkerConfig`](crate::ChunkerConfig) was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Max chunk size must be > 0.
    #[error("max chunk size must be > 0")]
    ZeroChunkSize,

    /// Overlap must be strictly smaller than the max chunk size.
    #[error("overlap {overlap} must be < max chunk size {size}")]
    OverlapExceedsSize {
        /// The max chunk size.
        size: usize,
        /// The overlap that was too large.
        overlap: usize,
    },
}

/// Result type for chunkwise operations.
pub type Result<T> = std::result::Result<T, Error>;
