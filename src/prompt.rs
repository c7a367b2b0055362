use anyhow::{Context, Result};
use std::io::BufRead;

use crate::ui;

/// Show `message` and read one line from `input`.
///
/// Returns `None` when the input is closed before a line arrives.
pub fn ask<R: BufRead>(input: &mut R, message: &str) -> Result<Option<String>> {
    ui::prompt(message);

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from standard input")?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
