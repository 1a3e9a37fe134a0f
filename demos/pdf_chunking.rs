//! PDF Page Chunking
//!
//! Chunk text extracted from a PDF with the PDF preset, then with overlap.
//!
//! ```bash
//! RUST_LOG=chunkwise=trace cargo run --example pdf_chunking
//! ```

use chunkwise::{Chunker, ChunkerConfig, RecursiveChunker, DEFAULT_SEPARATORS};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> chunkwise::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "chunkwise=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let page = "Machine learning models learn patterns from data.\n\
        They generalize these patterns to make predictions.\n\n\
        This is fundamentally different from traditional programming.\n\n\
        Deep learning extends this with multiple hidden layers. \
        Each layer learns increasingly abstract representations.";

    // 1000 chars, no overlap: the whole page is one chunk
    let chunker = RecursiveChunker::pdf();
    let chunks = chunker.split(page);
    println!("PDF preset: {} chunk(s)\n", chunks.len());

    // Smaller chunks with some overlap
    let config = ChunkerConfig::new(80).with_overlap(15);
    let chunker = RecursiveChunker::new(config, DEFAULT_SEPARATORS)?;

    for slab in chunker.chunk(page) {
        println!(
            "[{}] {}..{} ({} chars): {:?}",
            slab.index,
            slab.start,
            slab.end,
            slab.text.chars().count(),
            slab.text
        );
    }

    Ok(())
}
