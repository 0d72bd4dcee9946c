//! Unjumble command
//!
//! Runs a dictionary through the whole match pipeline and reports the lines
//! to print.

use crate::core::{Jumble, RequiredLetter};
use crate::error::UnjumbleError;
use crate::pipeline::{SelectionMode, SortMode, SortRequest, collect, order, present, select};
use crate::wordlists::DictionarySource;
use log::{debug, info};
use std::io;
use std::path::Path;

/// Configuration for one unjumble run
#[derive(Debug, Clone)]
pub struct UnjumbleConfig {
    pub jumble: Jumble,
    pub sort: Option<SortRequest>,
    pub include: Option<RequiredLetter>,
}

impl UnjumbleConfig {
    #[must_use]
    pub const fn new(jumble: Jumble) -> Self {
        Self {
            jumble,
            sort: None,
            include: None,
        }
    }

    #[must_use]
    pub fn with_sort(mut self, sort: SortRequest) -> Self {
        self.sort = Some(sort);
        self
    }

    #[must_use]
    pub fn with_include(mut self, letter: RequiredLetter) -> Self {
        self.include = Some(letter);
        self
    }

    /// Order and selection implied by the sort request
    #[must_use]
    pub fn modes(&self) -> (SortMode, SelectionMode) {
        self.sort
            .map_or((SortMode::None, SelectionMode::All), SortRequest::modes)
    }
}

/// Lines produced by a run that matched at least one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnjumbleResult {
    /// Output lines, in print order
    pub lines: Vec<String>,
    /// Words matched before selection and the include filter
    pub total_matches: usize,
}

/// Outcome of a completed scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnjumbleOutcome {
    /// At least one word matched; `lines` may still be empty after filtering
    Found(UnjumbleResult),
    /// No dictionary word could be spelled from the jumble
    NoMatches,
}

impl UnjumbleOutcome {
    /// Lines to print (empty for `NoMatches`)
    #[must_use]
    pub fn lines(&self) -> &[String] {
        match self {
            Self::Found(result) => &result.lines,
            Self::NoMatches => &[],
        }
    }

    #[must_use]
    pub const fn is_no_matches(&self) -> bool {
        matches!(self, Self::NoMatches)
    }
}

/// Run `config` over a stream of dictionary lines
///
/// # Errors
///
/// Returns an error if the line source fails partway through. No output is
/// produced in that case.
///
/// # Examples
/// ```
/// use unjumble::commands::{UnjumbleConfig, run_unjumble};
/// use unjumble::core::Jumble;
/// use unjumble::pipeline::SortRequest;
/// use unjumble::wordlists::loader::lines_from_slice;
///
/// let config = UnjumbleConfig::new(Jumble::new("pots").unwrap())
///     .with_sort(SortRequest::Longest);
/// let outcome = run_unjumble(&config, lines_from_slice(&["top", "pot", "pots", "stop"])).unwrap();
/// assert_eq!(outcome.lines(), ["pots", "stop"]);
/// ```
pub fn run_unjumble<I>(config: &UnjumbleConfig, lines: I) -> Result<UnjumbleOutcome, UnjumbleError>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let found = collect(lines, &config.jumble)?;
    if found.is_empty() {
        info!("no matches for '{}'", config.jumble);
        return Ok(UnjumbleOutcome::NoMatches);
    }
    let total_matches = found.len();

    let (sort_mode, selection_mode) = config.modes();
    let ordered = order(found, sort_mode);
    debug!("ordered {} matches by {sort_mode:?}", ordered.len());

    let selected = select(ordered, selection_mode)?;
    let lines = present(selected, config.include);
    info!(
        "{total_matches} matches for '{}', {} lines to print",
        config.jumble,
        lines.len()
    );

    Ok(UnjumbleOutcome::Found(UnjumbleResult {
        lines,
        total_matches,
    }))
}

/// Open the dictionary at `path` and run `config` over it
///
/// # Errors
///
/// Returns `UnjumbleError::Dictionary` if the file cannot be opened and
/// `UnjumbleError::Read` if reading fails.
pub fn unjumble_file<P: AsRef<Path>>(
    config: &UnjumbleConfig,
    path: P,
) -> Result<UnjumbleOutcome, UnjumbleError> {
    let source = DictionarySource::open(path)?;
    run_unjumble(config, source.lines())
}
