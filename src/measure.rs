//! Length units for chunk sizes.
//!
//! A "1000 character" limit means different things depending on who counts:
//!
//! ```text
//! "naïve café 👍🏽"
//!
//! Bytes:      21   <- what `str::len` reports
//! Chars:      13   <- Unicode scalar values
//! Graphemes:  12   <- what a reader sees ("👍🏽" is one cluster, two chars)
//! ```
//!
//! [`Measure`] picks the unit. Every size, overlap, and hard-cut position in
//! [`RecursiveChunker`](crate::RecursiveChunker) is counted in it, and cuts
//! always land on a boundary of that unit (never inside a code point).

use unicode_segmentation::UnicodeSegmentation;

/// The unit chunk sizes and overlaps are counted in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Measure {
    /// Unicode scalar values (`char`s).
    #[default]
    Chars,
    /// UTF-8 bytes. Cuts still respect code point boundaries.
    Bytes,
    /// Extended grapheme clusters (UAX #29).
    Graphemes,
}

impl Measure {
    /// The size of `text` in this unit.
    ///
    /// ```rust
    /// use chunkwise::Measure;
    ///
    /// assert_eq!(Measure::Bytes.size("日本"), 6);
    /// assert_eq!(Measure::Chars.size("日本"), 2);
    /// ```
    #[must_use]
    pub fn size(self, text: &str) -> usize {
        match self {
            Self::Chars => text.chars().count(),
            Self::Bytes => text.len(),
            Self::Graphemes => text.graphemes(true).count(),
        }
    }

    /// Byte offset ending the longest prefix of `text` that is at most
    /// `limit` units.
    ///
    /// Always takes at least one unit of non-empty text, so a caller looping
    /// on the result makes progress even when one code point is wider than
    /// `limit` bytes.
    pub(crate) fn prefix_end(self, text: &str, limit: usize) -> usize {
        let end = match self {
            Self::Chars => text
                .char_indices()
                .nth(limit)
                .map_or(text.len(), |(i, _)| i),
            Self::Bytes => {
                if limit >= text.len() {
                    text.len()
                } else {
                    let mut end = limit;
                    while !text.is_char_boundary(end) {
                        end -= 1;
                    }
                    end
                }
            }
            Self::Graphemes => text
                .grapheme_indices(true)
                .nth(limit)
                .map_or(text.len(), |(i, _)| i),
        };

        if end == 0 {
            self.first_unit_len(text)
        } else {
            end
        }
    }

    /// Byte offset where the trailing `count` units of `text` begin.
    ///
    /// Returns `0` when `text` has fewer than `count` units.
    pub(crate) fn suffix_start(self, text: &str, count: usize) -> usize {
        if count == 0 {
            return text.len();
        }
        match self {
            Self::Chars => text
                .char_indices()
                .rev()
                .nth(count - 1)
                .map_or(0, |(i, _)| i),
            Self::Bytes => {
                if count >= text.len() {
                    return 0;
                }
                let mut start = text.len() - count;
                while !text.is_char_boundary(start) {
                    start += 1;
                }
                start
            }
            Self::Graphemes => text
                .grapheme_indices(true)
                .rev()
                .nth(count - 1)
                .map_or(0, |(i, _)| i),
        }
    }

    fn first_unit_len(self, text: &str) -> usize {
        match self {
            Self::Chars | Self::Bytes => text.chars().next().map_or(0, char::len_utf8),
            Self::Graphemes => text.graphemes(true).next().map_or(0, str::len),
        }
    }
}
