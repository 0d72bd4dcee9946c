//! Unjumble
//!
//! Finds every dictionary word that can be spelled from a jumble of letters,
//! using each letter no more often than the jumble holds it.
//!
//! # Quick Start
//!
//! ```rust
//! use unjumble::commands::{UnjumbleConfig, run_unjumble};
//! use unjumble::core::Jumble;
//! use unjumble::pipeline::SortRequest;
//! use unjumble::wordlists::loader::lines_from_slice;
//!
//! let config = UnjumbleConfig::new(Jumble::new("pots").unwrap())
//!     .with_sort(SortRequest::Alphabetical);
//! let outcome = run_unjumble(&config, lines_from_slice(&["stop", "tops", "spots"])).unwrap();
//! assert_eq!(outcome.lines(), ["stop", "tops"]);
//! ```

// Core domain types
pub mod core;

// Error types and exit codes
pub mod error;

// Collect, order, select, present
pub mod pipeline;

// Dictionary sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::UnjumbleError;
