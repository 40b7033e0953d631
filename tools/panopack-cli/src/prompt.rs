//! Interactive fallback for inputs not given on the command line.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

pub const LOCATION_PROMPT: &str =
    "Enter location, this can be a name e.g. 'New York', or coordinates e.g. '29.315311813357592, 110.43475099921915': ";
pub const PACK_NAME_PROMPT: &str = "Enter the pack/zip file name: ";
pub const DESCRIPTION_PROMPT: &str = "Enter pack description (in-game text) (can be blank): ";

/// Print `message` and read one line, without the trailing newline.
///
/// End of input counts as an empty answer.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{}", message).context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read input")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Use `value` if present, otherwise prompt for it.
pub fn or_ask<R: BufRead, W: Write>(
    value: Option<String>,
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => ask(input, output, message),
    }
}
