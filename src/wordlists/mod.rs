//! Dictionary sources
//!
//! Plain-text word lists, one entry per line.

pub mod loader;

pub use loader::{DictionaryLines, DictionarySource};

/// Dictionary used when none is given
pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";
