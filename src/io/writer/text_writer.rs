//! Encoded text line sink

use super::line_sink::LineSink;
use crate::error::{CsvError, Result};
use crate::options::LineTerminator;
use encoding_rs::Encoding;
use std::io::Write;

/// Line sink writing encoded text to a byte stream
pub struct TextLineSink<W: Write> {
    writer: W,
    encoding: &'static Encoding,
    terminator: LineTerminator,
    lines_written: usize,
}

impl<W: Write> TextLineSink<W> {
    /// Create a new text line sink
    pub fn new(writer: W, encoding: &'static Encoding, terminator: LineTerminator) -> Self {
        Self {
            writer,
            encoding,
            terminator,
            lines_written: 0,
        }
    }

    /// Number of lines written so far
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Get the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for TextLineSink<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let (bytes, _, had_unmappable) = self.encoding.encode(line);
        if had_unmappable {
            return Err(CsvError::Encoding(format!(
                "line {} contains characters not representable in {}",
                self.lines_written + 1,
                self.encoding.name()
            )));
        }
        self.writer.write_all(&bytes)?;
        self.writer.write_all(self.terminator.as_str().as_bytes())?;
        self.lines_written += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
