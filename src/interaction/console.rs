use std::io::{BufRead, Write};

use super::SessionError;

/// Line based console boundary.
///
/// Wraps any reader and writer so sessions can run against stdin/stdout as
/// well as in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writes `text` without a line break and reads one trimmed line.
    ///
    /// Fails with [`SessionError::InputClosed`] once the input is exhausted.
    pub fn prompt(&mut self, text: &str) -> Result<String, SessionError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        // invalid UTF-8 is handed on to the parsers, which reject it
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }

        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
