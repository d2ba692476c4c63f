//! User-facing output for resolutions.
//!
//! - `formatter` - Pure formatting functions
//! - This module - Printing and writing CI output files

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::boundary::BoundaryWarning;
use crate::resolution::ResolutionResult;

pub mod formatter;

pub use formatter::{format_outputs, format_summary, format_warning, output_pairs};

/// Print the result summary to stdout
pub fn display_result(result: &ResolutionResult) {
    print!("{}", format_summary(result));
}

/// Print boundary warnings to stderr
pub fn display_warnings(warnings: &[BoundaryWarning]) {
    for warning in warnings {
        eprintln!("{}", format_warning(warning));
    }
}

/// Write `key=value` outputs to any writer
pub fn write_outputs<W: Write>(writer: &mut W, result: &ResolutionResult) -> io::Result<()> {
    writer.write_all(format_outputs(result).as_bytes())?;
    writer.flush()
}

/// Append `key=value` outputs to a CI output file, creating it if needed
pub fn append_outputs_to_file<P: AsRef<Path>>(
    path: P,
    result: &ResolutionResult,
) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write_outputs(&mut file, result)
}
