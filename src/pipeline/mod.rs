//! Match pipeline
//!
//! Dictionary lines flow through four stages:
//! collect → order → select → present.

mod collector;
mod order;
mod present;
mod select;

pub use collector::{collect, trim_terminator};
pub use order::{OrderedMatches, SortMode, compare_alphabetical, compare_by_length, order};
pub use present::present;
pub use select::{SelectionMode, select};

/// A user-facing sort request
///
/// Each request fixes both the order and the selection, so longest-only
/// selection always runs on length-ordered matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortRequest {
    /// Case-insensitive A to Z
    Alphabetical,
    /// Longest first, ties A to Z
    ByLength,
    /// Only the longest words, ties A to Z
    Longest,
}

impl SortRequest {
    /// Parse a request name
    ///
    /// Supported names: "alphabetical", "by-length", "longest".
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "alphabetical" => Some(Self::Alphabetical),
            "by-length" => Some(Self::ByLength),
            "longest" => Some(Self::Longest),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alphabetical => "alphabetical",
            Self::ByLength => "by-length",
            Self::Longest => "longest",
        }
    }

    /// The order and selection this request stands for
    #[must_use]
    pub const fn modes(self) -> (SortMode, SelectionMode) {
        match self {
            Self::Alphabetical => (SortMode::Alphabetical, SelectionMode::All),
            Self::ByLength => (SortMode::ByLengthDescending, SelectionMode::All),
            Self::Longest => (SortMode::ByLengthDescending, SelectionMode::LongestOnly),
        }
    }
}
