//! Result ordering
//!
//! Sorts matches alphabetically or by length. The applied order travels with
//! the matches so later stages can rely on it.

use std::cmp::Ordering;

/// How matches are ordered before presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Dictionary order
    #[default]
    None,
    /// Case-insensitive A to Z
    Alphabetical,
    /// Longest first, then case-insensitive A to Z
    ByLengthDescending,
}

/// Case-insensitive lexicographic comparison
///
/// A proper prefix sorts before the longer word.
#[must_use]
pub fn compare_alphabetical(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// Longer words first; equal lengths fall back to [`compare_alphabetical`]
#[must_use]
pub fn compare_by_length(a: &str, b: &str) -> Ordering {
    b.len()
        .cmp(&a.len())
        .then_with(|| compare_alphabetical(a, b))
}

/// Matches together with the order that was applied to them
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderedMatches {
    words: Vec<String>,
    mode: SortMode,
}

impl OrderedMatches {
    /// The order these matches are in
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> SortMode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Order `matches` according to `mode`
///
/// Sorting is stable: words comparing equal keep their dictionary order.
///
/// # Examples
/// ```
/// use unjumble::pipeline::{SortMode, order};
///
/// let words = vec!["tops".to_string(), "Pot".to_string(), "spot".to_string()];
/// let ordered = order(words, SortMode::ByLengthDescending);
/// assert_eq!(ordered.words(), ["spot", "tops", "Pot"]);
/// ```
#[must_use]
pub fn order(mut matches: Vec<String>, mode: SortMode) -> OrderedMatches {
    match mode {
        SortMode::None => {}
        SortMode::Alphabetical => matches.sort_by(|a, b| compare_alphabetical(a, b)),
        SortMode::ByLengthDescending => matches.sort_by(|a, b| compare_by_length(a, b)),
    }

    OrderedMatches {
        words: matches,
        mode,
    }
}
