//! Display functions for command results

use super::formatters::{PROGRAM, format_error};
use crate::error::UnjumbleError;
use colored::Colorize;
use std::io::{self, Write};

/// Write each line followed by a newline
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Print an error to stderr
///
/// The program-name prefix is highlighted when colors are enabled.
pub fn print_error(err: &UnjumbleError) {
    let message = format_error(err);
    match message.strip_prefix(PROGRAM) {
        Some(rest) => eprintln!("{}{rest}", PROGRAM.red().bold()),
        None => eprintln!("{message}"),
    }
}
