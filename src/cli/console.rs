//! Console abstraction over an input/output pair.
//!
//! The interactive flows talk to a [`Console`] instead of stdin/stdout
//! directly, so end-to-end tests can drive them with scripted input and
//! capture everything printed.

use crate::errors::Result;
use std::io::{BufRead, Write};

/// A prompt/print pair over any buffered reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an input/output pair.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints one line.
    ///
    /// # Errors
    /// Propagates write failures as [`Error::Io`](crate::errors::Error::Io).
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Prints a prompt (no trailing newline) and reads one trimmed line.
    ///
    /// # Errors
    /// Propagates read/write failures; end of input is reported as an
    /// `UnexpectedEof` I/O error so interactive loops terminate instead of
    /// spinning.
    pub fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed",
            )
            .into());
        }
        Ok(line.trim().to_string())
    }

    /// Releases the underlying input and output (used by tests to inspect
    /// captured output).
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
