//! Interactive prompts

use super::output::Output;
use std::io::{self, BufRead, Write};

/// True only for `yes` or `y`, ignoring case and surrounding whitespace.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y")
}

/// Read one line from `input`, without the line terminator.
///
/// Returns `None` at end of input.
pub fn read_answer<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask a yes/no question and wait for the answer.
///
/// End of input counts as "no".
pub fn request_confirmation<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    out: &mut Output<W>,
) -> io::Result<bool> {
    out.prompt(&format!("{question} (yes/no): "));
    let answer = read_answer(input)?;
    Ok(answer.as_deref().is_some_and(is_affirmative))
}
