//! `legendary sanitize` - print a safe filename for each input.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use super::write_line;
use crate::error::Error;
use crate::sanitizer::{Mode, sanitize_with};

/// Sanitize every name with `mode`, plus an absent name first when `null` is set.
///
/// In strict mode the first rejected name aborts the command; the error
/// chain carries an [`Error::Sanitize`].
pub fn execute(names: &[String], mode: Mode, null: bool, out: &mut impl Write) -> Result<()> {
    info!(mode = %mode, count = names.len() + usize::from(null), "Sanitizing filenames");

    let inputs = null
        .then_some(None)
        .into_iter()
        .chain(names.iter().map(|name| Some(name.as_str())));

    for input in inputs {
        let sanitized = sanitize_with(input, mode)
            .map_err(Error::from)
            .with_context(|| format!("Cannot sanitize {input:?} in {mode} mode"))?;
        write_line(out, &sanitized)?;
    }

    Ok(())
}
