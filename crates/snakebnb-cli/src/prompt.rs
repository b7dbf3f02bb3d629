//! Interactive prompt helpers.
//!
//! Every helper re-prompts on invalid input instead of failing, so a typo
//! never aborts the session. Returning `Ok(None)` means the user canceled
//! the field with an empty line (or stdin reached end of file); callers
//! abandon the current flow and fall back to the menu.

use std::io::{self, Write};

use anyhow::{Context, Result};
use jiff::civil::Date;
use snakebnb_core::OperationStatus;

/// Reads one trimmed line after printing the prompt. `Ok(None)` on EOF.
pub fn raw_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut buffer = String::new();
    let read = io::stdin()
        .read_line(&mut buffer)
        .context("Failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_string()))
}

/// Prompts for a non-empty line. Empty input cancels the field.
pub fn line(prompt: &str) -> Result<Option<String>> {
    match raw_line(prompt)? {
        Some(text) if text.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Prompts for a `yyyy-mm-dd` date, re-prompting until it parses.
pub fn date(prompt: &str) -> Result<Option<Date>> {
    loop {
        let Some(text) = line(prompt)? else {
            return Ok(None);
        };
        match text.parse::<Date>() {
            Ok(date) => return Ok(Some(date)),
            Err(_) => report_invalid("Dates must look like yyyy-mm-dd."),
        }
    }
}

/// Prompts for a positive number, re-prompting until it parses.
pub fn positive_f64(prompt: &str) -> Result<Option<f64>> {
    loop {
        let Some(text) = line(prompt)? else {
            return Ok(None);
        };
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => return Ok(Some(value)),
            _ => report_invalid("Enter a positive number."),
        }
    }
}

/// Prompts for a positive whole number, re-prompting until it parses.
pub fn positive_i64(prompt: &str) -> Result<Option<i64>> {
    loop {
        let Some(text) = line(prompt)? else {
            return Ok(None);
        };
        match text.parse::<i64>() {
            Ok(value) if value > 0 => return Ok(Some(value)),
            _ => report_invalid("Enter a positive whole number."),
        }
    }
}

/// Prompts for a yes/no answer. Anything starting with `y` is yes.
pub fn yes_no(prompt: &str) -> Result<bool> {
    let answer = raw_line(prompt)?.unwrap_or_default();
    Ok(answer.to_lowercase().starts_with('y'))
}

/// Prompts for a 1-based selection from a list of `len` entries and returns
/// the zero-based index. Out-of-range picks re-prompt instead of indexing
/// past the list.
pub fn selection(prompt: &str, len: usize) -> Result<Option<usize>> {
    loop {
        let Some(text) = line(prompt)? else {
            return Ok(None);
        };
        match text.parse::<usize>() {
            Ok(choice) if (1..=len).contains(&choice) => return Ok(Some(choice - 1)),
            _ => report_invalid(&format!("Pick a number between 1 and {len}.")),
        }
    }
}

fn report_invalid(message: &str) {
    print!("{}", OperationStatus::failure(message.to_string()));
}
