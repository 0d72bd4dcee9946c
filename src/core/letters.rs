//! Letter counting primitives
//!
//! A `LetterMultiset` holds the letters still available for spelling a word,
//! one bucket per ASCII letter. `RequiredLetter` is the single letter every
//! presented word must contain.

use crate::error::UnjumbleError;
use std::fmt;

const ALPHABET_SIZE: usize = 26;

/// Bucket index for an ASCII letter, case-insensitively
///
/// Returns `None` for anything outside `a-z` / `A-Z`.
#[inline]
fn slot(letter: char) -> Option<usize> {
    if letter.is_ascii_alphabetic() {
        Some(usize::from(letter.to_ascii_lowercase() as u8 - b'a'))
    } else {
        None
    }
}

/// Case-insensitive multiset of ASCII letters
///
/// Counts never go negative: consuming a letter that is not available is a
/// no-op that reports failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterMultiset {
    counts: [u32; ALPHABET_SIZE],
}

impl LetterMultiset {
    /// Create an empty multiset
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; ALPHABET_SIZE],
        }
    }

    /// Build a multiset from a sequence of letters
    ///
    /// Non-letters are ignored.
    ///
    /// # Examples
    /// ```
    /// use unjumble::core::LetterMultiset;
    ///
    /// let letters = LetterMultiset::from_letters("Pots");
    /// assert_eq!(letters.count('p'), 1);
    /// assert_eq!(letters.count('S'), 1);
    /// assert!(!letters.contains('z'));
    /// ```
    #[must_use]
    pub fn from_letters(letters: &str) -> Self {
        letters.chars().collect()
    }

    /// Add one instance of `letter`
    pub fn insert(&mut self, letter: char) {
        if let Some(i) = slot(letter) {
            self.counts[i] += 1;
        }
    }

    /// True if at least one `letter` remains
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.count(letter) > 0
    }

    /// Remaining count for `letter` (0 for non-letters)
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> u32 {
        slot(letter).map_or(0, |i| self.counts[i])
    }

    /// Spend one instance of `letter`
    ///
    /// Returns `false` and leaves the multiset untouched if none remain.
    #[inline]
    pub fn consume(&mut self, letter: char) -> bool {
        match slot(letter) {
            Some(i) if self.counts[i] > 0 => {
                self.counts[i] -= 1;
                true
            }
            _ => false,
        }
    }

    /// Total number of letters remaining
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }
}

impl FromIterator<char> for LetterMultiset {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let mut set = Self::new();
        iter.into_iter().for_each(|c| set.insert(c));
        set
    }
}

/// A single letter that every presented word must contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredLetter(char);

impl RequiredLetter {
    /// Parse a required letter from user input
    ///
    /// # Errors
    /// Returns `UnjumbleError::Usage` unless `text` is exactly one ASCII letter.
    pub fn new(text: &str) -> Result<Self, UnjumbleError> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Ok(Self(c.to_ascii_lowercase())),
            _ => Err(UnjumbleError::Usage),
        }
    }

    /// The letter, lowercased
    #[must_use]
    pub const fn letter(self) -> char {
        self.0
    }

    /// Case-insensitive containment check
    #[must_use]
    pub fn is_in(self, word: &str) -> bool {
        word.chars().any(|c| c.eq_ignore_ascii_case(&self.0))
    }
}

impl fmt::Display for RequiredLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiset_counts_case_insensitively() {
        let set = LetterMultiset::from_letters("aAbB c");
        assert_eq!(set.count('a'), 2);
        assert_eq!(set.count('B'), 2);
        assert_eq!(set.count('c'), 1);
        assert_eq!(set.count(' '), 0);
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn consume_decrements_until_exhausted() {
        let mut set = LetterMultiset::from_letters("ee");
        assert!(set.consume('E'));
        assert!(set.contains('e'));
        assert!(set.consume('e'));
        assert!(!set.contains('e'));
        assert!(!set.consume('e'));
        assert_eq!(set.count('e'), 0);
        assert!(set.is_empty());
    }

    #[test]
    fn consume_non_letter_fails() {
        let mut set = LetterMultiset::from_letters("abc");
        assert!(!set.consume('\''));
        assert!(!set.consume('é'));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn copies_are_independent() {
        let original = LetterMultiset::from_letters("abc");
        let mut copy = original;
        assert!(copy.consume('a'));
        assert!(original.contains('a'));
        assert!(!copy.contains('a'));
    }

    #[test]
    fn required_letter_accepts_single_letter() {
        let letter = RequiredLetter::new("Z").unwrap();
        assert_eq!(letter.letter(), 'z');
        assert_eq!(letter.to_string(), "z");
    }

    #[test]
    fn required_letter_rejects_bad_input() {
        assert!(matches!(RequiredLetter::new(""), Err(UnjumbleError::Usage)));
        assert!(matches!(RequiredLetter::new("ab"), Err(UnjumbleError::Usage)));
        assert!(matches!(RequiredLetter::new("1"), Err(UnjumbleError::Usage)));
    }

    #[test]
    fn required_letter_containment_ignores_case() {
        let letter = RequiredLetter::new("s").unwrap();
        assert!(letter.is_in("Stop"));
        assert!(letter.is_in("pots"));
        assert!(!letter.is_in("pot"));
    }
}
