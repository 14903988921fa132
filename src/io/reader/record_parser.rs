//! Record reconstruction from physical lines

use crate::error::{CsvError, Result};
use crate::io::escape::{is_balanced, unescape};
use crate::options::CsvOptions;
use crate::record::Record;

/// Accumulates physical lines until they form one complete record.
///
/// Each line is split on the separator and the tokens are rejoined until
/// the pending text is balanced (see [`is_balanced`]). A pending field still
/// open at the end of a line continues on the next line, joined with the
/// line break that ended the previous line.
pub(crate) struct RecordAssembler {
    separator: char,
    quote: char,
    start_line: usize,
    lines: usize,
    fields: Vec<String>,
    pending: Option<String>,
}

impl RecordAssembler {
    pub fn new(options: &CsvOptions, start_line: usize) -> Self {
        Self {
            separator: options.separator,
            quote: options.quote,
            start_line,
            lines: 0,
            fields: Vec::new(),
            pending: None,
        }
    }

    /// Feed the next physical line. Returns `true` once the record is complete.
    ///
    /// `line_break` is put back between a pending field and this line.
    pub fn push_line(&mut self, line: &str, line_break: &str) -> Result<bool> {
        self.lines += 1;

        for (index, token) in line.split(self.separator).enumerate() {
            let candidate = match self.pending.take() {
                None => token.to_string(),
                Some(mut pending) => {
                    if index == 0 {
                        pending.push_str(line_break);
                    } else {
                        pending.push(self.separator);
                    }
                    pending.push_str(token);
                    pending
                }
            };

            if is_balanced(&candidate, self.quote) {
                let field = unescape(&candidate, self.quote).ok_or_else(|| {
                    CsvError::MalformedRecord {
                        line: self.start_line,
                        message: format!("lone quote character {:?} as field", self.quote),
                    }
                })?;
                self.fields.push(field.into_owned());
            } else {
                self.pending = Some(candidate);
            }
        }

        Ok(self.pending.is_none())
    }

    /// Line the record started on
    pub fn start_line(&self) -> usize {
        self.start_line
    }

    /// Number of physical lines consumed
    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn finish(self) -> Record {
        Record::from(self.fields)
    }
}
