//! Core domain types for unjumbling
//!
//! This module contains the letter-counting types and the matching rule.
//! Everything here is pure and free of I/O.

mod jumble;
mod letters;
mod matcher;

pub use jumble::{Jumble, MIN_JUMBLE_LEN};
pub use letters::{LetterMultiset, RequiredLetter};
pub use matcher::{MIN_WORD_LEN, is_eligible, matches};
