//! Line source trait

use crate::error::Result;

/// Trait for reading physical lines of text
pub trait LineSource {
    /// Check whether at least one more byte of input is available
    fn has_more(&mut self) -> Result<bool>;

    /// Read the next physical line without its terminator, or `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Number of physical lines read so far
    fn line_number(&self) -> usize;

    /// Terminator that ended the line last returned by [`read_line`](Self::read_line).
    ///
    /// `None` when the line had no terminator or the source cannot tell;
    /// the reader then joins continuation lines with `\r\n`.
    fn last_terminator(&self) -> Option<&'static str> {
        None
    }
}

impl<S: LineSource + ?Sized> LineSource for Box<S> {
    fn has_more(&mut self) -> Result<bool> {
        (**self).has_more()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        (**self).read_line()
    }

    fn line_number(&self) -> usize {
        (**self).line_number()
    }

    fn last_terminator(&self) -> Option<&'static str> {
        (**self).last_terminator()
    }
}

/// In-memory line source over a list of lines
#[derive(Debug, Clone, Default)]
pub struct VecLineSource {
    lines: std::collections::VecDeque<String>,
    line_number: usize,
}

impl VecLineSource {
    /// Create a source yielding the given lines in order
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            line_number: 0,
        }
    }
}

impl LineSource for VecLineSource {
    fn has_more(&mut self) -> Result<bool> {
        Ok(!self.lines.is_empty())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let line = self.lines.pop_front();
        if line.is_some() {
            self.line_number += 1;
        }
        Ok(line)
    }

    fn line_number(&self) -> usize {
        self.line_number
    }
}
