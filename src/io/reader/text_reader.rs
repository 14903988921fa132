//! Encoded text line source

use super::line_source::LineSource;
use crate::error::Result;
use encoding_rs::Encoding;
use std::io::BufRead;

/// Line source reading encoded text from a buffered reader.
///
/// Lines end at `\n`; a `\r` right before it is dropped as well. The
/// terminator that ended the last line is kept, see
/// [`LineSource::last_terminator`]. A final line without terminator is
/// still returned.
pub struct TextLineSource<R: BufRead> {
    reader: R,
    encoding: &'static Encoding,
    line_number: usize,
    buffer: Vec<u8>,
    terminator: Option<&'static str>,
}

impl<R: BufRead> TextLineSource<R> {
    /// Create a new text line source
    pub fn new(reader: R, encoding: &'static Encoding) -> Self {
        Self {
            reader,
            encoding,
            line_number: 0,
            buffer: Vec::new(),
            terminator: None,
        }
    }

    /// Get the inner reader
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn decode_line(&self) -> String {
        let bytes = &self.buffer[..];
        let (decoded, had_errors) = if self.line_number == 1 {
            self.encoding.decode_with_bom_removal(bytes)
        } else {
            self.encoding.decode_without_bom_handling(bytes)
        };

        if had_errors {
            log::warn!(
                "line {}: malformed {} byte sequence replaced",
                self.line_number,
                self.encoding.name()
            );
        }
        decoded.into_owned()
    }
}

impl<R: BufRead> LineSource for TextLineSource<R> {
    fn has_more(&mut self) -> Result<bool> {
        Ok(!self.reader.fill_buf()?.is_empty())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        self.buffer.clear();
        self.terminator = None;
        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }

        if self.buffer.last() == Some(&b'\n') {
            self.buffer.pop();
            self.terminator = Some("\n");
            if self.buffer.last() == Some(&b'\r') {
                self.buffer.pop();
                self.terminator = Some("\r\n");
            }
        }

        self.line_number += 1;
        Ok(Some(self.decode_line()))
    }

    fn line_number(&self) -> usize {
        self.line_number
    }

    fn last_terminator(&self) -> Option<&'static str> {
        self.terminator
    }
}
