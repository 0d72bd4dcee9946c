//! Word matching against a jumble
//!
//! A word matches when every one of its letters can be drawn from the jumble
//! without using any letter more often than the jumble holds it.

use super::Jumble;

/// Shortest dictionary word considered for matching
///
/// Deliberately one longer than `MIN_JUMBLE_LEN`.
pub const MIN_WORD_LEN: usize = 4;

/// True if a trimmed dictionary word is long enough to be considered
#[inline]
#[must_use]
pub const fn is_eligible(word: &str) -> bool {
    word.len() >= MIN_WORD_LEN
}

/// Check whether `word` can be spelled from the letters in `jumble`
///
/// Comparison is case-insensitive and respects letter counts. The empty word
/// never matches. Length eligibility is not checked here, see [`is_eligible`].
///
/// # Examples
/// ```
/// use unjumble::core::{Jumble, matches};
///
/// let jumble = Jumble::new("pots").unwrap();
/// assert!(matches("STOP", &jumble));
/// assert!(!matches("spots", &jumble)); // only one 's'
/// ```
#[must_use]
pub fn matches(word: &str, jumble: &Jumble) -> bool {
    if word.is_empty() {
        return false;
    }

    let mut available = jumble.multiset();
    word.chars().all(|c| available.consume(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jumble(letters: &str) -> Jumble {
        Jumble::new(letters).unwrap()
    }

    #[test]
    fn exact_anagram_matches() {
        assert!(matches("stop", &jumble("pots")));
        assert!(matches("tops", &jumble("pots")));
    }

    #[test]
    fn subset_matches() {
        assert!(matches("cats", &jumble("eastauriomntlc")));
        assert!(matches("cast", &jumble("eastauriomntlc")));
    }

    #[test]
    fn multiplicity_is_respected() {
        assert!(!matches("casts", &jumble("eastauriomntlc")));
        assert!(matches("casts", &jumble("cassta")));
        assert!(!matches("books", &jumble("boks")));
    }

    #[test]
    fn missing_letter_rejects() {
        assert!(!matches("dogs", &jumble("dogx")));
    }

    #[test]
    fn case_insensitive_both_ways() {
        assert!(matches("StOp", &jumble("POTS")));
        assert!(matches("STOP", &jumble("pots")));
    }

    #[test]
    fn empty_word_never_matches() {
        assert!(!matches("", &jumble("abc")));
    }

    #[test]
    fn punctuation_never_matches() {
        assert!(!matches("cat's", &jumble("catsxyz")));
        assert!(!matches("pots\n", &jumble("pots")));
    }

    #[test]
    fn matching_does_not_leak_between_words() {
        let j = jumble("pots");
        assert!(matches("stop", &j));
        assert!(matches("stop", &j));
        assert_eq!(j.multiset().len(), 4);
    }

    #[test]
    fn matches_agrees_with_letter_counts() {
        let j = jumble("aabbcdeeee");
        for word in ["abba", "babe", "bead", "cede", "deeee", "abbba", "ccab", "faded"] {
            let expected = word.chars().all(|c| {
                let needed = word.chars().filter(|&x| x == c).count();
                needed <= j.letters().chars().filter(|&x| x == c).count()
            });
            assert_eq!(matches(word, &j), expected, "word {word}");
        }
    }

    #[test]
    fn eligibility_threshold() {
        assert!(!is_eligible(""));
        assert!(!is_eligible("god"));
        assert!(is_eligible("gods"));
    }
}
