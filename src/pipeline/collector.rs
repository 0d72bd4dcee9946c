//! Dictionary scanning
//!
//! Streams dictionary lines through the matcher and keeps the words that can
//! be spelled from the jumble, in dictionary order.

use crate::core::{Jumble, is_eligible, matches};
use crate::error::UnjumbleError;
use log::debug;
use std::io;

/// Strip a trailing `\n` or `\r\n`
///
/// Line sources hand over lines with their terminator attached; this is the
/// one place it is removed.
#[inline]
#[must_use]
pub fn trim_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Scan `lines` and return every entry spellable from `jumble`
///
/// Entries are trimmed of their line terminator and kept only if they are at
/// least `MIN_WORD_LEN` long. Duplicates are kept. The scan stops at the first
/// read error.
///
/// # Errors
///
/// Returns `UnjumbleError::Read` if the line source fails.
///
/// # Examples
/// ```
/// use unjumble::core::Jumble;
/// use unjumble::pipeline::collect;
/// use unjumble::wordlists::loader::lines_from_slice;
///
/// let jumble = Jumble::new("pots").unwrap();
/// let found = collect(lines_from_slice(&["top", "stop", "spot"]), &jumble).unwrap();
/// assert_eq!(found, vec!["stop", "spot"]);
/// ```
pub fn collect<I>(lines: I, jumble: &Jumble) -> Result<Vec<String>, UnjumbleError>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut found = Vec::new();
    let mut scanned = 0usize;
    let mut eligible = 0usize;

    for line in lines {
        let mut line = line?;
        scanned += 1;

        let word_len = {
            let word = trim_terminator(&line);
            if !is_eligible(word) {
                continue;
            }
            eligible += 1;

            if !matches(word, jumble) {
                continue;
            }
            word.len()
        };

        line.truncate(word_len);
        found.push(line);
    }

    debug!(
        "scanned {scanned} lines, {eligible} eligible, {} matched '{jumble}'",
        found.len()
    );

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::{lines_from_reader, lines_from_slice};

    fn jumble(letters: &str) -> Jumble {
        Jumble::new(letters).unwrap()
    }

    #[test]
    fn trims_terminators() {
        assert_eq!(trim_terminator("cats\n"), "cats");
        assert_eq!(trim_terminator("cats\r\n"), "cats");
        assert_eq!(trim_terminator("cats"), "cats");
        assert_eq!(trim_terminator("\n"), "");
    }

    #[test]
    fn keeps_dictionary_order() {
        let lines = lines_from_slice(&["cat\n", "cats\n", "a\n", "cast\n", "casts\n"]);
        let found = collect(lines, &jumble("eastauriomntlc")).unwrap();
        assert_eq!(found, vec!["cats", "cast"]);
    }

    #[test]
    fn short_words_never_collected() {
        let lines = lines_from_slice(&["do", "god", "dig", ""]);
        let found = collect(lines, &jumble("dogi")).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let lines = lines_from_slice(&["stop", "pots", "stop"]);
        let found = collect(lines, &jumble("pots")).unwrap();
        assert_eq!(found, vec!["stop", "pots", "stop"]);
    }

    #[test]
    fn original_case_is_preserved() {
        let lines = lines_from_slice(&["Stop\r\n", "POTS"]);
        let found = collect(lines, &jumble("pots")).unwrap();
        assert_eq!(found, vec!["Stop", "POTS"]);
    }

    #[test]
    fn non_utf8_entry_is_skipped() {
        let bytes: &[u8] = b"stop\ncaf\xe9\npots\n";
        let found = collect(lines_from_reader(bytes), &jumble("potscafe")).unwrap();
        assert_eq!(found, vec!["stop", "pots"]);
    }

    #[test]
    fn read_error_aborts_scan() {
        let lines = vec![
            Ok("stop".to_string()),
            Err(io::Error::other("device error")),
            Ok("pots".to_string()),
        ];
        let result = collect(lines, &jumble("pots"));
        assert!(matches!(result, Err(UnjumbleError::Read(_))));
    }
}
