//! Blocking terminal prompts over generic reader/writer pairs.

use std::io::{self, BufRead, Write};

use super::WorkflowError;

/// Sequential prompt driver.
///
/// Generic over its streams so workflow tests run against in-memory
/// buffers; production commands wrap locked stdin/stdout. Input blocks
/// without timeout.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line of report text, no input expected.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    fn read_answer(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// Free-text prompt where blank input means "unset".
    ///
    /// Never yields an empty string: blank answers resolve to `None`.
    pub fn optional(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let answer = self.read_answer(prompt)?;
        Ok(if answer.is_empty() { None } else { Some(answer) })
    }

    /// Free-text prompt that must not be blank.
    pub fn required(&mut self, what: &'static str, prompt: &str) -> Result<String, WorkflowError> {
        let answer = self.read_answer(prompt)?;
        if answer.is_empty() {
            return Err(WorkflowError::EmptyInput { what });
        }
        Ok(answer)
    }

    /// Strict 1-based selection into a catalog of `max` entries.
    ///
    /// Non-numeric input and out-of-range indices abort the workflow.
    /// Returns the 0-based index.
    pub fn table_index(&mut self, prompt: &str, max: usize) -> Result<usize, WorkflowError> {
        let answer = self.read_answer(prompt)?;
        let index: i64 = answer.parse().map_err(|_| WorkflowError::NotANumber {
            input: answer.clone(),
        })?;
        if index < 1 || index as usize > max {
            return Err(WorkflowError::OutOfRange { index, max });
        }
        Ok(index as usize - 1)
    }

    /// Lenient 1-based selection: blank, non-numeric, and out-of-range
    /// input all resolve to `None` rather than aborting.
    pub fn optional_table_index(
        &mut self,
        prompt: &str,
        max: usize,
    ) -> io::Result<Option<usize>> {
        let answer = self.read_answer(prompt)?;
        if answer.is_empty() {
            return Ok(None);
        }
        match answer.parse::<i64>() {
            Ok(index) if index >= 1 && index as usize <= max => Ok(Some(index as usize - 1)),
            _ => Ok(None),
        }
    }
}
