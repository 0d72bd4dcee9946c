//! Formatting utilities for terminal output

use crate::error::UnjumbleError;

/// Program name used to prefix error messages
pub const PROGRAM: &str = "unjumble";

/// Format an error for stderr
///
/// The usage message stands alone; everything else is prefixed with the
/// program name.
#[must_use]
pub fn format_error(err: &UnjumbleError) -> String {
    match err {
        UnjumbleError::Usage => err.to_string(),
        _ => format!("{PROGRAM}: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::USAGE;

    #[test]
    fn usage_is_unprefixed() {
        assert_eq!(format_error(&UnjumbleError::Usage), USAGE);
    }

    #[test]
    fn letters_errors_are_prefixed() {
        assert_eq!(
            format_error(&UnjumbleError::TooFewLetters),
            "unjumble: must supply at least three letters"
        );
        assert_eq!(
            format_error(&UnjumbleError::InvalidLetters),
            "unjumble: can only unjumble alphabetic characters"
        );
    }
}
