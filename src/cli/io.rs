//! Line-oriented console I/O for the menu
//!
//! Generic over the reader and writer so sessions can run against in-memory
//! buffers.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Answer to a prompt
#[derive(Debug, Clone, PartialEq)]
pub enum Input<T> {
    Value(T),
    /// The line did not parse
    Invalid(String),
    /// No more input
    Eof,
}

/// Prompt-and-read console
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Writes one line
    pub fn say(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.writer, "{}", line.as_ref())
    }

    /// Writes `label` without a newline and reads one line, without its
    /// line terminator. `None` at end of input.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", label)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Prompts and parses the trimmed answer.
    pub fn prompt_parse<T: FromStr>(&mut self, label: &str) -> io::Result<Input<T>> {
        Ok(match self.prompt(label)? {
            None => Input::Eof,
            Some(line) => match line.trim().parse() {
                Ok(value) => Input::Value(value),
                Err(_) => Input::Invalid(line),
            },
        })
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
