//! `legendary capitalize` - title-case each input line.

use std::io::Write;

use anyhow::Result;
use tracing::info;

use super::write_line;
use crate::capitalizer::Capitalizer;

pub fn execute(texts: &[String], capitalizer: &Capitalizer, out: &mut impl Write) -> Result<()> {
    info!(
        locale = %capitalizer.locale(),
        delimiters = capitalizer.delimiters().len(),
        count = texts.len(),
        "Capitalizing text"
    );

    for text in texts {
        write_line(out, &capitalizer.capitalize(text))?;
    }

    Ok(())
}
