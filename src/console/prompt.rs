//! Yes/no prompt used during continuous playback.

use std::io::{BufRead, Write};

use super::output::Output;
use crate::error::Result;

/// Asked after every batch of songs.
pub const CONTINUE_PROMPT: &str = "Are you still listening [Y|N]? ";

/// Asked again after an answer that is neither yes nor no.
pub const RETRY_PROMPT: &str =
    "\nI didn't get that. Please type Y to continue listening or N to stop: ";

/// Asks whether playback should continue.
///
/// Only the first non-blank character of an answer counts, case-insensitive.
/// Blank lines are ignored; anything other than Y or N asks again. End of
/// input means stop.
pub fn ask_continue<R: BufRead, W: Write>(input: &mut R, output: &mut Output<W>) -> Result<bool> {
    output.prompt(CONTINUE_PROMPT)?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        let Some(answer) = line.trim_start().chars().next() else {
            continue;
        };
        match answer.to_ascii_uppercase() {
            'Y' => return Ok(true),
            'N' => return Ok(false),
            _ => output.prompt(RETRY_PROMPT)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::io::Cursor;

    fn ask(answers: &str) -> (bool, String) {
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut output = Output::new(Vec::new(), OutputFormat::Text);
        let answer = ask_continue(&mut input, &mut output).unwrap();
        (answer, String::from_utf8(output.into_inner()).unwrap())
    }

    #[test]
    fn yes_and_no() {
        assert!(ask("y\n").0);
        assert!(ask("Yes please\n").0);
        assert!(!ask("N\n").0);
        assert!(!ask("  no\n").0);
    }

    #[test]
    fn invalid_answers_ask_again() {
        let (answer, text) = ask("maybe\n\nq\nY\n");
        assert!(answer);
        assert_eq!(text.matches("I didn't get that").count(), 2);
        assert!(text.starts_with(CONTINUE_PROMPT));
    }

    #[test]
    fn end_of_input_stops() {
        let (answer, _) = ask("");
        assert!(!answer);
        let (answer, _) = ask("what\n");
        assert!(!answer);
    }
}
