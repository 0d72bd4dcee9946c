//! Terminal output formatting
//!
//! Writing result lines and rendering error messages.

pub mod display;
pub mod formatters;

pub use display::{print_error, write_lines};
pub use formatters::format_error;
