//! The Slab type: a chunk of text with position metadata.

/// A chunk of text with its position in the original document.
///
/// Every slab is a contiguous substring of the input. Downstream stages
/// (ID assignment, page mapping, embedding) can use the offsets to point
/// back at the source.
///
/// ## Byte Offsets
///
/// `start` and `end` are byte offsets into the original text, not character
/// indices, whatever [`Measure`](crate::Measure) the chunker counts in. This
/// matches Rust's string slicing semantics:
///
/// ```rust
/// use chunkwise::Slab;
///
/// let text = "Hello, world!";
/// let slab = Slab::new("world", 7, 12, 0);
///
/// assert_eq!(&text[slab.start..slab.end], "world");
/// ```
///
/// ## Overlap Handling
///
/// When chunks overlap, adjacent slabs share some text:
///
/// ```text
/// Original: "The quick brown fox"
/// Slab 0:   "The quick"   [0..9]
/// Slab 1:   "ick brown"   [6..15]  <- starts before slab 0 ends
///                ^
///            overlap region [6..9]
/// ```
///
/// Without overlap, consecutive slabs never share bytes. Any gap between
/// them holds separator text that was dropped at the split point.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slab {
    /// The chunk text.
    pub text: String,
    /// Byte offset where this chunk starts in the original document.
    pub start: usize,
    /// Byte offset where this chunk ends (exclusive) in the original document.
    pub end: usize,
    /// Zero-based index of this chunk in the sequence.
    pub index: usize,
}

impl Slab {
    /// Create a new slab.
    #[must_use]
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }

    /// The length of this chunk in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether this chunk is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The byte span of this chunk in the original document.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Bytes shared with the previous slab (0 if they don't overlap).
    #[must_use]
    pub fn overlap_with(&self, previous: &Self) -> usize {
        previous.end.saturating_sub(self.start)
    }
}

impl std::fmt::Display for Slab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Slab {{ index: {}, span: {}..{}, len: {} }}",
            self.index,
            self.start,
            self.end,
            self.len()
        )
    }
}
