//! Codec options shared by the reader and the writer

use crate::error::{CsvError, Result};
use crate::io::encoding::encoding_for_label;
use encoding_rs::Encoding;

/// Line terminator appended by the writer after each record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineTerminator {
    /// Terminator of the platform the crate was compiled for
    pub const fn platform() -> Self {
        if cfg!(windows) {
            LineTerminator::CrLf
        } else {
            LineTerminator::Lf
        }
    }

    /// The terminator text
    pub const fn as_str(self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::CrLf => "\r\n",
        }
    }
}

impl Default for LineTerminator {
    fn default() -> Self {
        Self::platform()
    }
}

/// Configuration for [`CsvReader`](crate::CsvReader) and [`CsvWriter`](crate::CsvWriter).
///
/// Options are a plain `Copy` value: each reader and writer keeps its own
/// copy and never changes it, so the same options can be handed to any
/// number of readers and writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field separator. Default: `,`
    pub separator: char,
    /// Quote character wrapping fields that need escaping. Default: `"`
    pub quote: char,
    /// Whether the first record is a header. Default: `false`
    pub has_header: bool,
    /// Text encoding of the source/sink. Default: UTF-8
    pub encoding: &'static Encoding,
    /// Line terminator used by the writer. Default: platform terminator
    pub line_terminator: LineTerminator,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            separator: ',',
            quote: '"',
            has_header: false,
            encoding: encoding_rs::UTF_8,
            line_terminator: LineTerminator::platform(),
        }
    }
}

impl CsvOptions {
    /// Create options with the default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create default options using the given encoding
    pub fn from_encoding(encoding: &'static Encoding) -> Self {
        Self {
            encoding,
            ..Self::default()
        }
    }

    /// Set the field separator
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set the quote character
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Set whether the first record is a header
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set the text encoding
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set the encoding by name, see [`encoding_for_label`]
    pub fn with_encoding_label(mut self, label: &str) -> Result<Self> {
        self.encoding = encoding_for_label(label)
            .ok_or_else(|| CsvError::InvalidConfig(format!("unknown encoding '{}'", label)))?;
        Ok(self)
    }

    /// Set the line terminator used by the writer
    pub fn with_line_terminator(mut self, line_terminator: LineTerminator) -> Self {
        self.line_terminator = line_terminator;
        self
    }

    /// Check the construction-time invariants.
    ///
    /// Separator and quote must differ and neither may be a line-break
    /// character. Lines are split on `\n` before decoding, so the encoding
    /// must be ASCII-compatible.
    pub fn validate(&self) -> Result<()> {
        if self.separator == self.quote {
            return Err(CsvError::InvalidConfig(format!(
                "separator and quote character are both {:?}",
                self.separator
            )));
        }
        for (name, c) in [("separator", self.separator), ("quote character", self.quote)] {
            if c == '\r' || c == '\n' {
                return Err(CsvError::InvalidConfig(format!(
                    "{} cannot be a line-break character",
                    name
                )));
            }
        }
        if !self.encoding.is_ascii_compatible() {
            return Err(CsvError::InvalidConfig(format!(
                "encoding {} is not ASCII-compatible",
                self.encoding.name()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CsvOptions::default();
        assert_eq!(options.separator, ',');
        assert_eq!(options.quote, '"');
        assert!(!options.has_header);
        assert_eq!(options.encoding, encoding_rs::UTF_8);
        assert_eq!(options.line_terminator, LineTerminator::platform());
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let options = CsvOptions::new()
            .with_separator(';')
            .with_quote('\'')
            .with_header(true)
            .with_line_terminator(LineTerminator::CrLf);
        assert_eq!(options.separator, ';');
        assert_eq!(options.quote, '\'');
        assert!(options.has_header);
        assert_eq!(options.line_terminator.as_str(), "\r\n");
    }

    #[test]
    fn test_separator_equals_quote_is_rejected() {
        let options = CsvOptions::new().with_separator('"');
        assert!(matches!(options.validate(), Err(CsvError::InvalidConfig(_))));
    }

    #[test]
    fn test_line_break_separator_is_rejected() {
        let options = CsvOptions::new().with_separator('\n');
        assert!(matches!(options.validate(), Err(CsvError::InvalidConfig(_))));
        let options = CsvOptions::new().with_quote('\r');
        assert!(matches!(options.validate(), Err(CsvError::InvalidConfig(_))));
    }

    #[test]
    fn test_utf16_is_rejected() {
        let options = CsvOptions::from_encoding(encoding_rs::UTF_16LE);
        assert!(matches!(options.validate(), Err(CsvError::InvalidConfig(_))));
    }

    #[test]
    fn test_from_encoding_keeps_other_defaults() {
        let options = CsvOptions::from_encoding(encoding_rs::WINDOWS_1252);
        assert_eq!(options.encoding, encoding_rs::WINDOWS_1252);
        assert_eq!(options.separator, ',');
        assert_eq!(options.quote, '"');
        assert!(!options.has_header);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_encoding_label() {
        let options = CsvOptions::new().with_encoding_label("ansi_1252").unwrap();
        assert_eq!(options.encoding, encoding_rs::WINDOWS_1252);
        assert!(CsvOptions::new().with_encoding_label("nope").is_err());
    }
}
