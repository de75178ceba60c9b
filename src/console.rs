//! Line-oriented prompts over any reader/writer pair.
//!
//! The binary wires this to stdin/stdout; tests drive it with in-memory buffers.

use crate::error::{BikeshareError, Result};
use std::io::{BufRead, Write};

/// True for a case-insensitive "yes".
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `text` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Prints `question` and reads one line, trimmed. Bytes that are not
    /// UTF-8 are replaced, so such an answer just fails to parse.
    ///
    /// # Errors
    ///
    /// [`BikeshareError::Aborted`] once the input is exhausted.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        writeln!(self.output, "\n{question}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(BikeshareError::Aborted);
        }
        Ok(String::from_utf8_lossy(&line).trim().to_owned())
    }

    /// Re-asks `question` until `parse` accepts the answer.
    ///
    /// # Errors
    ///
    /// [`BikeshareError::Aborted`] once the input is exhausted.
    pub fn ask_until<T>(&mut self, question: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T> {
        loop {
            let answer = self.ask(question)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            log::debug!("Rejected answer {answer:?}");
        }
    }

    /// Asks a yes/no question; anything but "yes" is a no.
    ///
    /// # Errors
    ///
    /// [`BikeshareError::Aborted`] once the input is exhausted.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(is_affirmative(&self.ask(question)?))
    }
}
