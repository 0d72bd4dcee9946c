//! Result presentation
//!
//! Applies the required-letter filter and produces the final output lines.

use crate::core::RequiredLetter;

/// Filter `selected` down to the lines that are printed
///
/// Without a required letter every word is kept. Order is preserved either
/// way, and an empty result is not an error here.
#[must_use]
pub fn present(selected: Vec<String>, required: Option<RequiredLetter>) -> Vec<String> {
    match required {
        None => selected,
        Some(letter) => selected.into_iter().filter(|w| letter.is_in(w)).collect(),
    }
}
