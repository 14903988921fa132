//! I/O module for reading and writing delimiter-separated text

pub mod encoding;
pub mod escape;
pub mod reader;
pub mod writer;

pub use reader::{CsvReader, FileCsvReader, LineSource, ReaderState, TextLineSource, VecLineSource};
pub use writer::{CsvWriter, FileCsvWriter, LineSink, TextLineSink};

use crate::error::{CsvError, Result};
use crate::options::CsvOptions;
use crate::record::Record;

/// Parse CSV text into its header (if the options ask for one) and records.
///
/// `text` is already decoded, so `options.encoding` is not used.
pub fn parse_str(text: &str, options: CsvOptions) -> Result<(Option<Record>, Vec<Record>)> {
    let source = TextLineSource::new(text.as_bytes(), encoding_rs::UTF_8);
    let mut reader = CsvReader::new(source, options)?;
    let header = reader.header()?.cloned();
    let records = reader.by_ref().collect::<Result<Vec<_>>>()?;
    Ok((header, records))
}

/// Serialize an optional header and records to a string.
///
/// Lines end with `options.line_terminator`; `options.encoding` is not used.
pub fn write_to_string<I, R, F>(
    header: Option<&Record>,
    records: I,
    options: CsvOptions,
) -> Result<String>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = F>,
    F: AsRef<str>,
{
    let sink = TextLineSink::new(Vec::new(), encoding_rs::UTF_8, options.line_terminator);
    let mut writer = CsvWriter::new(sink, options)?;
    if let Some(header) = header {
        writer.set_header(header.clone())?;
    }
    writer.write_records(records)?;
    let bytes = writer.into_inner()?.into_inner();
    String::from_utf8(bytes).map_err(|e| CsvError::Encoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::LineTerminator;

    #[test]
    fn test_parse_str_with_header() {
        let options = CsvOptions::default().with_header(true).with_separator(';');
        let (header, records) = parse_str("a;b\n1;2\n3;\"x;y\"\n", options).unwrap();
        assert_eq!(header.unwrap(), ["a", "b"]);
        assert_eq!(records, vec![Record::from(["1", "2"]), Record::from(["3", "x;y"])]);
    }

    #[test]
    fn test_parse_str_malformed() {
        let err = parse_str("\"unterminated", CsvOptions::default()).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_write_to_string() {
        let options = CsvOptions::default().with_line_terminator(LineTerminator::Lf);
        let header = Record::from(["name", "quote"]);
        let text = write_to_string(
            Some(&header),
            vec![vec!["Ada", "\"hi\""], vec!["Bob", "a,b"]],
            options,
        )
        .unwrap();
        assert_eq!(text, "name,quote\nAda,\"\"\"hi\"\"\"\nBob,\"a,b\"\n");
    }
}
