use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Prints `prompt` and reads one trimmed line. `None` once input is exhausted.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from input")?;

    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

/// Asks until the answer is Y or N, in either case.
pub fn ask_confirmation<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<bool>> {
    loop {
        let Some(answer) = read_line(input, output, message)? else {
            return Ok(None);
        };

        match answer.to_lowercase().as_str() {
            "y" => return Ok(Some(true)),
            "n" => return Ok(Some(false)),
            _ => writeln!(output, "Enter Y or N")?,
        }
    }
}

/// Asks until the answer is a non-negative whole number.
pub fn ask_int<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<i64>> {
    loop {
        let Some(answer) = read_line(input, output, message)? else {
            return Ok(None);
        };

        let digits_only = !answer.is_empty() && answer.chars().all(|c| c.is_ascii_digit());
        match answer.parse::<i64>() {
            Ok(value) if digits_only => return Ok(Some(value)),
            _ => writeln!(output, "Invalid input")?,
        }
    }
}
