//! Line reader for simulator output.

use std::io;

use crate::input::ReadStatus;

use super::{CommandLine, Line, ParseError};

/// A reader of simulator output.
pub struct Reader<R> {
    inner: R,
    buf: String,
    line_number: usize,
}

impl<R> Reader<R>
where
    R: io::BufRead,
{
    /// Creates a new reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: String::new(),
            line_number: 0,
        }
    }

    /// Returns the number of lines read so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Returns an error located at the most recently read line.
    pub fn line_error(&self, error: ParseError) -> io::Error {
        line_error(self.line_number, error)
    }

    /// Reads the echoed command line.
    ///
    /// The reader is assumed to be positioned at the start of the output.
    pub fn read_command_line(&mut self) -> io::Result<CommandLine> {
        self.buf.clear();

        if self.inner.read_line(&mut self.buf)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                ParseError::MissingHeader,
            ));
        }
        self.line_number += 1;

        Ok(CommandLine::new(self.buf.trim_end()))
    }

    /// Reads and classifies the next line.
    pub fn read_line(&mut self, sample_count: usize) -> ReadStatus<Line<'_>> {
        self.buf.clear();

        match self.inner.read_line(&mut self.buf) {
            Ok(0) => ReadStatus::Done,
            Ok(_) => {
                self.line_number += 1;

                match Line::parse(&self.buf, sample_count) {
                    Ok(line) => ReadStatus::Read(line),
                    Err(e) => ReadStatus::Error(line_error(self.line_number, e)),
                }
            }
            Err(e) => ReadStatus::Error(e),
        }
    }
}

fn line_error(line_number: usize, error: ParseError) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("line {line_number}: {error}"),
    )
}
