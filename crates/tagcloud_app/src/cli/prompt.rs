//! Console prompts for values not given on the command line.

use std::io::{self, BufRead, Write};

use tagcloud_core::validate_top_n;
use tagcloud_logging::cloud_debug;

#[derive(Debug, thiserror::Error)]
pub(crate) enum PromptError {
    #[error("input closed before an answer was given")]
    Closed,
    #[error("console io error: {0}")]
    Io(#[from] io::Error),
}

/// Writes `message`, then reads one line and returns it trimmed.
pub(crate) fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<String, PromptError> {
    write!(output, "{message}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PromptError::Closed);
    }
    Ok(line.trim().to_owned())
}

/// Asks until a non-empty answer is given.
pub(crate) fn prompt_path<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<String, PromptError> {
    loop {
        let answer = prompt_line(input, output, message)?;
        if !answer.is_empty() {
            return Ok(answer);
        }
    }
}

/// Asks for the number of words until the answer is a number in `[1, available]`.
pub(crate) fn prompt_top_n<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    available: usize,
) -> Result<usize, PromptError> {
    let message =
        format!("Please enter the number of words to be included in tag cloud[1, {available}]: ");
    loop {
        let answer = prompt_line(input, output, &message)?;
        match answer.parse::<usize>() {
            Ok(n) if validate_top_n(n, available).is_ok() => return Ok(n),
            _ => cloud_debug!("Rejected word count answer {answer:?}"),
        }
    }
}
