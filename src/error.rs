//! Error types
//!
//! Every failure the unjumbler can report, with the process exit code the
//! command-line tool uses for it.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// One-line usage summary for the command-line tool
pub const USAGE: &str =
    "Usage: unjumble [--alpha|--len|--longest] [--include letter] letters [dictionary]";

/// Exit code for a completed scan that matched nothing
pub const NO_MATCHES_EXIT: u8 = 10;

/// Exit code for I/O failures outside the scan, such as writing to stdout
pub const IO_FAILURE_EXIT: u8 = 2;

/// Errors produced while configuring or running an unjumble
#[derive(Error, Debug)]
pub enum UnjumbleError {
    /// Malformed or missing arguments
    #[error("{}", USAGE)]
    Usage,

    /// Jumble shorter than three letters
    #[error("must supply at least three letters")]
    TooFewLetters,

    /// Jumble containing something other than ASCII letters
    #[error("can only unjumble alphabetic characters")]
    InvalidLetters,

    /// Dictionary could not be opened
    #[error("file \"{}\" can not be opened", .path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Dictionary failed partway through the scan
    #[error("error reading dictionary: {0}")]
    Read(#[from] io::Error),

    /// Longest-only selection asked of matches not ordered by length
    #[error("longest-only selection requires matches ordered by length")]
    UnorderedSelection,
}

impl UnjumbleError {
    /// Process exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage | Self::UnorderedSelection => 1,
            Self::Dictionary { .. } | Self::Read(_) => 2,
            Self::TooFewLetters => 3,
            Self::InvalidLetters => 4,
        }
    }
}
