//! Line sink trait

use crate::error::Result;

/// Trait for writing physical lines of text
pub trait LineSink {
    /// Write one line followed by a line terminator
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Flush the sink
    fn flush(&mut self) -> Result<()>;
}

impl<S: LineSink + ?Sized> LineSink for Box<S> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        (**self).write_line(line)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

/// Collects lines in memory, without terminators
impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
