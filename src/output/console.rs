//! Line-oriented console
//!
//! Wraps an input reader and an output writer so the game can run against
//! stdin/stdout or in-memory buffers.

use std::io::{self, BufRead, Write};

pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print `prompt` without a newline and read one line
    ///
    /// Returns the line without surrounding whitespace, or `None` once input is exhausted.
    /// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
    ///
    /// # Errors
    ///
    /// Returns an error if writing the prompt or reading the line fails.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut input = Vec::new();
        if self.reader.read_until(b'\n', &mut input)? == 0 {
            // Keep the transcript tidy when input ends mid-prompt
            writeln!(self.writer)?;
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&input).trim().to_string()))
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
