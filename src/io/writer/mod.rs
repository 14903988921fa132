//! CSV writer module

mod line_sink;
mod text_writer;

pub use line_sink::LineSink;
pub use text_writer::TextLineSink;

use crate::error::{CsvError, Result};
use crate::io::escape::escape;
use crate::options::CsvOptions;
use crate::record::Record;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writer over a file on disk
pub type FileCsvWriter = CsvWriter<TextLineSink<BufWriter<File>>>;

/// CSV writer.
///
/// Every record becomes exactly one call to [`LineSink::write_line`].
/// Fields are quoted only when they contain the separator, the quote
/// character or a line break.
pub struct CsvWriter<S: LineSink> {
    sink: S,
    options: CsvOptions,
    header: Option<Record>,
    records_written: usize,
}

impl<S: LineSink> CsvWriter<S> {
    /// Create a new writer over a line sink
    pub fn new(sink: S, options: CsvOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            sink,
            options,
            header: None,
            records_written: 0,
        })
    }

    /// Get the writer options
    pub fn options(&self) -> &CsvOptions {
        &self.options
    }

    /// Get the header, if one was written
    pub fn header(&self) -> Option<&Record> {
        self.header.as_ref()
    }

    /// Number of data records written (the header is not counted)
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Write the header record.
    ///
    /// The header can be set only once, and only before any data record.
    pub fn set_header(&mut self, header: impl Into<Record>) -> Result<()> {
        let header = header.into();
        if header.is_empty() {
            return Err(CsvError::InvalidArgument(
                "header must have at least one column".to_string(),
            ));
        }
        if self.header.is_some() {
            return Err(CsvError::InvalidState(
                "the CSV header has already been written".to_string(),
            ));
        }
        if self.records_written > 0 {
            return Err(CsvError::InvalidState(format!(
                "the CSV header must precede data records ({} already written)",
                self.records_written
            )));
        }

        let line = self.format_fields(header.iter().map(Some))?;
        self.sink.write_line(&line)?;
        log::debug!("header written with {} columns", header.len());
        self.header = Some(header);
        Ok(())
    }

    /// Write one record.
    ///
    /// A record without fields is an [`CsvError::InvalidArgument`]; it would
    /// otherwise be written as a blank line.
    pub fn write_record<I, F>(&mut self, record: I) -> Result<()>
    where
        I: IntoIterator<Item = F>,
        F: AsRef<str>,
    {
        self.write_optional_record(record.into_iter().map(Some))
    }

    /// Write one record whose fields may be missing; missing fields are written empty
    pub fn write_optional_record<I, F>(&mut self, record: I) -> Result<()>
    where
        I: IntoIterator<Item = Option<F>>,
        F: AsRef<str>,
    {
        let line = self.format_fields(record)?;
        self.sink.write_line(&line)?;
        self.records_written += 1;
        log::trace!("record {} written", self.records_written);
        Ok(())
    }

    /// Write records in order
    pub fn write_records<I, R, F>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = F>,
        F: AsRef<str>,
    {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// Flush the underlying sink
    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()
    }

    /// Flush and release the underlying sink
    pub fn close(mut self) -> Result<()> {
        self.sink.flush()?;
        log::debug!("writer closed after {} records", self.records_written);
        Ok(())
    }

    /// Flush and return the underlying sink
    pub fn into_inner(mut self) -> Result<S> {
        self.sink.flush()?;
        Ok(self.sink)
    }

    /// Join escaped fields with the separator.
    ///
    /// A record made of a single empty field is written as an empty quoted
    /// field, so that it does not turn into a blank line.
    fn format_fields<I, F>(&self, fields: I) -> Result<String>
    where
        I: IntoIterator<Item = Option<F>>,
        F: AsRef<str>,
    {
        let separator = self.options.separator;
        let quote = self.options.quote;
        let mut line = String::new();
        let mut count = 0;

        for field in fields {
            if count > 0 {
                line.push(separator);
            }
            if let Some(field) = field {
                line.push_str(&escape(field.as_ref(), separator, quote));
            }
            count += 1;
        }

        match count {
            0 => Err(CsvError::InvalidArgument(
                "record must have at least one field".to_string(),
            )),
            1 if line.is_empty() => {
                line.push(quote);
                line.push(quote);
                Ok(line)
            }
            _ => Ok(line),
        }
    }
}

impl<W: Write> CsvWriter<TextLineSink<W>> {
    /// Create a writer over any byte stream, encoded with the configured encoding
    pub fn from_writer(writer: W, options: CsvOptions) -> Result<Self> {
        let sink = TextLineSink::new(writer, options.encoding, options.line_terminator);
        Self::new(sink, options)
    }
}

impl FileCsvWriter {
    /// Create (or truncate) a file for writing
    pub fn create<P: AsRef<Path>>(path: P, options: CsvOptions) -> Result<Self> {
        options.validate()?;
        let file = File::create(path)?;
        Self::from_writer(BufWriter::new(file), options)
    }

    /// Open a file for appending, creating it if it does not exist
    pub fn append<P: AsRef<Path>>(path: P, options: CsvOptions) -> Result<Self> {
        options.validate()?;
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Self::from_writer(BufWriter::new(file), options)
    }
}
