//! CSV reader

mod line_source;
mod record_parser;
mod text_reader;

pub use line_source::{LineSource, VecLineSource};
pub use text_reader::TextLineSource;

use record_parser::RecordAssembler;

use crate::error::{CsvError, Result};
use crate::io::escape::LINE_BREAK;
use crate::options::CsvOptions;
use crate::record::Record;
use once_cell::unsync::OnceCell;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reader over a file on disk
pub type FileCsvReader = CsvReader<TextLineSource<BufReader<File>>>;

/// Where the reader is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderState {
    /// Header not resolved yet
    Fresh,
    /// Header resolved, no data record read yet
    HeaderResolved,
    /// At least one data record read
    Reading,
    /// End of input reached; every further read returns `None`
    Exhausted,
    /// A record failed to parse; every further read fails
    Poisoned {
        /// Line the failed record started on
        line: usize,
    },
}

/// CSV reader.
///
/// Wraps a [`LineSource`] and rebuilds logical records from its physical
/// lines. With [`CsvOptions::has_header`] set, the first record is taken
/// as header the first time either [`header`](Self::header) or a record
/// read is called, and cached for the lifetime of the reader.
///
/// After a read fails the reader is poisoned: the source position is
/// somewhere inside the failed record, so every later call returns
/// [`CsvError::InvalidState`].
pub struct CsvReader<S: LineSource> {
    source: S,
    options: CsvOptions,
    header: OnceCell<Option<Record>>,
    state: ReaderState,
}

impl<S: LineSource> CsvReader<S> {
    /// Create a new reader over a line source
    pub fn new(source: S, options: CsvOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            source,
            options,
            header: OnceCell::new(),
            state: ReaderState::Fresh,
        })
    }

    /// Get the reader options
    pub fn options(&self) -> &CsvOptions {
        &self.options
    }

    /// Current lifecycle state
    pub fn state(&self) -> ReaderState {
        self.state
    }

    /// Number of physical lines consumed so far
    pub fn line_number(&self) -> usize {
        self.source.line_number()
    }

    /// Get the header record.
    ///
    /// Returns `None` when the options say there is no header, or when the
    /// input is empty.
    pub fn header(&mut self) -> Result<Option<&Record>> {
        if let ReaderState::Poisoned { line } = self.state {
            return Err(poisoned(line));
        }
        self.resolve_header()?;
        Ok(self.header.get().and_then(Option::as_ref))
    }

    /// Read the next record, or `None` at end of input
    pub fn next_record(&mut self) -> Result<Option<Record>> {
        self.resolve_header()?;
        read_record(&mut self.source, &self.options, &mut self.state)
    }

    /// Read up to `count` records, stopping early at end of input
    pub fn next_records(&mut self, count: usize) -> Result<Vec<Record>> {
        self.resolve_header()?;
        let mut records = Vec::new();
        for _ in 0..count {
            match read_record(&mut self.source, &self.options, &mut self.state)? {
                Some(record) => records.push(record),
                None => break,
            }
        }
        Ok(records)
    }

    /// Release the underlying source.
    ///
    /// Consumes the reader; the source and whatever handle it owns are
    /// dropped on return. Dropping the reader without calling `close` has
    /// the same effect.
    pub fn close(self) {
        log::debug!("closing reader at line {}", self.source.line_number());
    }

    /// Get the underlying line source
    pub fn into_inner(self) -> S {
        self.source
    }

    fn resolve_header(&mut self) -> Result<()> {
        let Self {
            source,
            options,
            header,
            state,
        } = self;

        header.get_or_try_init(|| {
            let header = if options.has_header {
                read_record(source, options, state)?
            } else {
                None
            };
            if let Some(header) = &header {
                log::debug!("header resolved with {} columns", header.len());
            }
            if *state == ReaderState::Fresh {
                *state = ReaderState::HeaderResolved;
            }
            Ok::<_, CsvError>(header)
        })?;
        Ok(())
    }
}

impl<R: Read> CsvReader<TextLineSource<BufReader<R>>> {
    /// Create a reader over any byte stream, decoded with the configured encoding
    pub fn from_reader(reader: R, options: CsvOptions) -> Result<Self> {
        let source = TextLineSource::new(BufReader::new(reader), options.encoding);
        Self::new(source, options)
    }
}

impl FileCsvReader {
    /// Open a file for reading
    pub fn from_path<P: AsRef<Path>>(path: P, options: CsvOptions) -> Result<Self> {
        options.validate()?;
        let file = File::open(path)?;
        Self::from_reader(file, options)
    }
}

impl<S: LineSource> Iterator for CsvReader<S> {
    type Item = Result<Record>;

    /// Yields records until end of input; after an error, yields `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.state, ReaderState::Poisoned { .. }) {
            return None;
        }
        self.next_record().transpose()
    }
}

fn poisoned(line: usize) -> CsvError {
    CsvError::InvalidState(format!(
        "reader failed on the record starting at line {} and cannot continue",
        line
    ))
}

/// Read one logical record from the source, updating the reader state.
fn read_record<S: LineSource>(
    source: &mut S,
    options: &CsvOptions,
    state: &mut ReaderState,
) -> Result<Option<Record>> {
    match *state {
        ReaderState::Exhausted => return Ok(None),
        ReaderState::Poisoned { line } => return Err(poisoned(line)),
        ReaderState::Fresh | ReaderState::HeaderResolved | ReaderState::Reading => {}
    }

    let start_line = source.line_number() + 1;
    let result = assemble_record(source, options);
    match &result {
        Ok(None) => {
            log::debug!("end of input after line {}", source.line_number());
            *state = ReaderState::Exhausted;
        }
        Ok(Some(record)) => {
            log::trace!("record at line {}: {} fields", start_line, record.len());
            if *state == ReaderState::HeaderResolved {
                *state = ReaderState::Reading;
            }
        }
        Err(_) => *state = ReaderState::Poisoned { line: start_line },
    }
    result
}

fn assemble_record<S: LineSource>(source: &mut S, options: &CsvOptions) -> Result<Option<Record>> {
    let mut line = match source.read_line()? {
        Some(line) => line,
        None => return Ok(None),
    };

    // A blank last line is the end of the file, not an empty record
    if line.is_empty() && !source.has_more()? {
        return Ok(None);
    }

    let mut assembler = RecordAssembler::new(options, source.line_number());
    let mut line_break = LINE_BREAK;
    while !assembler.push_line(&line, line_break)? {
        line_break = source.last_terminator().unwrap_or(LINE_BREAK);
        line = match source.read_line()? {
            Some(next) => next,
            None => {
                return Err(CsvError::MalformedRecord {
                    line: assembler.start_line(),
                    message: "unterminated quoted field at end of input".to_string(),
                })
            }
        };
    }

    if assembler.lines() > 1 {
        log::debug!(
            "record at line {} spans {} physical lines",
            assembler.start_line(),
            assembler.lines()
        );
    }
    Ok(Some(assembler.finish()))
}
