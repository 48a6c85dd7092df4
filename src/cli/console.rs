//! Line-oriented console
//!
//! Wraps a reader and a writer so handlers can prompt and print without
//! touching stdin/stdout directly. Tests drive it with byte buffers.

use std::fmt;
use std::io::{self, BufRead, Write};

/// Blocking prompt/print pair over any reader and writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label`, then read one line.
    ///
    /// The line terminator is stripped; other whitespace is kept. Returns
    /// `None` once the input is exhausted.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(Some(line))
    }

    /// Print a value followed by a newline
    pub fn line(&mut self, text: impl fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Print preformatted text as-is
    pub fn text(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())
    }

    /// Direct access to the writer (feedback hooks draw here)
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Give back the writer, consuming the console
    pub fn into_output(self) -> W {
        self.output
    }
}
