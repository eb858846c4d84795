//! Prompted input with bounded retry.
//!
//! [`Console`] wraps a reader/writer pair so the menu can be exercised in
//! tests with a scripted `Cursor` instead of a live terminal. A field prompt
//! allows [`MAX_ATTEMPTS`] tries; exhausting them aborts the current
//! operation with [`RosterError::RetryExhausted`]. End of input is surfaced
//! as `None` so callers can wind down cleanly.

use crate::error::{Result, RosterError};
use colored::Colorize;
use std::io::{BufRead, Write};

pub const MAX_ATTEMPTS: usize = 3;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Prints `prompt` and reads one trimmed line; `None` on end of input.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    /// Prompts for a required field, retrying on invalid input.
    ///
    /// Returns `Ok(None)` on end of input and `RetryExhausted` after
    /// [`MAX_ATTEMPTS`] rejected values.
    pub fn prompt_field<T>(
        &mut self,
        field: &'static str,
        prompt: &str,
        mut parse: impl FnMut(&str) -> Result<T>,
    ) -> Result<Option<T>> {
        for _ in 0..MAX_ATTEMPTS {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => self.write_line(&err.to_string().yellow().to_string())?,
            }
        }
        Err(RosterError::RetryExhausted(field))
    }

    /// Like [`prompt_field`](Self::prompt_field), but a blank line means
    /// "keep the current value" and yields `Some(None)`.
    pub fn prompt_optional<T>(
        &mut self,
        field: &'static str,
        prompt: &str,
        mut parse: impl FnMut(&str) -> Result<T>,
    ) -> Result<Option<Option<T>>> {
        for _ in 0..MAX_ATTEMPTS {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            if line.is_empty() {
                return Ok(Some(None));
            }
            match parse(&line) {
                Ok(value) => return Ok(Some(Some(value))),
                Err(err) => self.write_line(&err.to_string().yellow().to_string())?,
            }
        }
        Err(RosterError::RetryExhausted(field))
    }

    /// A y/n question; anything but `y` counts as no.
    pub fn confirm(&mut self, prompt: &str) -> Result<Option<bool>> {
        let Some(line) = self.read_line(prompt)? else {
            return Ok(None);
        };
        Ok(Some(line.eq_ignore_ascii_case("y")))
    }
}
