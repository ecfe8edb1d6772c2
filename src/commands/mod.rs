//! CLI command implementations for legendary.
//!
//! Each submodule implements one command:
//!
//! - [`sanitize`] - Turn names into safe filenames
//! - [`capitalize`] - Title-case text
//!
//! Handlers write their results to any [`Write`] sink, one line per input,
//! so they can be exercised without a terminal.

pub mod capitalize;
pub mod sanitize;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

/// Inputs to process: the positional arguments, or every line of `reader` when there are none.
pub fn collect_inputs(args: Vec<String>, reader: impl BufRead) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }

    reader
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .context("Failed to read input lines from stdin")
}

/// Write one output line, with context on failure.
fn write_line(out: &mut impl Write, line: &str) -> Result<()> {
    writeln!(out, "{line}").context("Failed to write output")
}
