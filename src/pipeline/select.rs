//! Result selection
//!
//! Optionally narrows ordered matches down to the longest words.

use super::{OrderedMatches, SortMode};
use crate::error::UnjumbleError;
use log::debug;

/// Which ordered matches are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Keep everything
    #[default]
    All,
    /// Keep only the words sharing the greatest length
    LongestOnly,
}

/// Apply `mode` to `ordered`
///
/// `LongestOnly` takes the length of the first word as the longest, so it
/// needs matches ordered with `SortMode::ByLengthDescending`.
///
/// # Errors
///
/// Returns `UnjumbleError::UnorderedSelection` if `LongestOnly` is requested
/// for matches in any other order.
pub fn select(ordered: OrderedMatches, mode: SelectionMode) -> Result<Vec<String>, UnjumbleError> {
    match mode {
        SelectionMode::All => Ok(ordered.into_words()),
        SelectionMode::LongestOnly => {
            if ordered.mode() != SortMode::ByLengthDescending {
                return Err(UnjumbleError::UnorderedSelection);
            }

            let mut words = ordered.into_words();
            let Some(longest) = words.first().map(String::len) else {
                return Ok(words);
            };

            words.retain(|w| w.len() == longest);
            debug!("kept {} words of length {longest}", words.len());
            Ok(words)
        }
    }
}
