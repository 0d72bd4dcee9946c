//! Jumble representation
//!
//! A Jumble is the validated set of letters a word may be spelled from.

use super::LetterMultiset;
use crate::error::UnjumbleError;
use std::fmt;
use std::str::FromStr;

/// Fewest letters a jumble may contain
pub const MIN_JUMBLE_LEN: usize = 3;

/// Validated, lowercased jumble of ASCII letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jumble {
    letters: String,
    multiset: LetterMultiset,
}

impl Jumble {
    /// Create a new Jumble from user-supplied letters
    ///
    /// # Errors
    /// Returns:
    /// - `UnjumbleError::TooFewLetters` if fewer than three characters are given
    /// - `UnjumbleError::InvalidLetters` if any character is not an ASCII letter
    ///
    /// The length check runs first.
    ///
    /// # Examples
    /// ```
    /// use unjumble::core::Jumble;
    ///
    /// let jumble = Jumble::new("PoTs").unwrap();
    /// assert_eq!(jumble.letters(), "pots");
    ///
    /// assert!(Jumble::new("ab").is_err());
    /// assert!(Jumble::new("ab3").is_err());
    /// ```
    pub fn new(letters: impl Into<String>) -> Result<Self, UnjumbleError> {
        let letters = letters.into();

        if letters.chars().count() < MIN_JUMBLE_LEN {
            return Err(UnjumbleError::TooFewLetters);
        }

        if !letters.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(UnjumbleError::InvalidLetters);
        }

        let letters = letters.to_ascii_lowercase();
        let multiset = LetterMultiset::from_letters(&letters);

        Ok(Self { letters, multiset })
    }

    /// The letters, lowercased, in the order given
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// A fresh copy of the available letters
    ///
    /// Every candidate word is checked against its own copy.
    #[inline]
    #[must_use]
    pub const fn multiset(&self) -> LetterMultiset {
        self.multiset
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl FromStr for Jumble {
    type Err = UnjumbleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Jumble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jumble_creation_valid() {
        let jumble = Jumble::new("dog").unwrap();
        assert_eq!(jumble.letters(), "dog");
        assert_eq!(jumble.len(), 3);
        assert_eq!(jumble.multiset().count('o'), 1);
    }

    #[test]
    fn jumble_creation_uppercase_normalized() {
        let jumble: Jumble = "DoG".parse().unwrap();
        assert_eq!(jumble.letters(), "dog");
        assert_eq!(format!("{jumble}"), "dog");
    }

    #[test]
    fn jumble_too_short() {
        assert!(matches!(Jumble::new(""), Err(UnjumbleError::TooFewLetters)));
        assert!(matches!(Jumble::new("ab"), Err(UnjumbleError::TooFewLetters)));
    }

    #[test]
    fn jumble_invalid_characters() {
        assert!(matches!(Jumble::new("ab3"), Err(UnjumbleError::InvalidLetters)));
        assert!(matches!(Jumble::new("a bc"), Err(UnjumbleError::InvalidLetters)));
        assert!(matches!(Jumble::new("abcé"), Err(UnjumbleError::InvalidLetters)));
    }

    #[test]
    fn length_checked_before_characters() {
        assert!(matches!(Jumble::new("a1"), Err(UnjumbleError::TooFewLetters)));
    }

    #[test]
    fn repeated_letters_are_counted() {
        let jumble = Jumble::new("sasss").unwrap();
        assert_eq!(jumble.multiset().count('s'), 4);
        assert_eq!(jumble.multiset().count('a'), 1);
    }
}
