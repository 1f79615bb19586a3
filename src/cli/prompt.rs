//! Console prompts
//!
//! Prompts read one line at a time. `None` means the input reached its end.
//! Bytes that are not valid UTF-8 are replaced rather than rejected, so a
//! garbled line is handled like any other unexpected input.

use std::io::{BufRead, Write};

use crate::error::BudgetResult;
use crate::models::parse_positive_amount;

/// Print a prompt and read one trimmed line
pub fn prompt_string<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> BudgetResult<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }

    Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
}

/// Prompt until the user enters a strictly positive number
pub fn prompt_positive_amount<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> BudgetResult<Option<f64>> {
    loop {
        let Some(line) = prompt_string(input, output, prompt)? else {
            return Ok(None);
        };

        match parse_positive_amount(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => writeln!(output, "Invalid amount: {}. Please enter a positive number.", e)?,
        }
    }
}
