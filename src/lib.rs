//! # csv_codec
//!
//! A small Rust library for reading and writing delimiter-separated values.
//!
//! The reader and the writer are two independent halves of the same
//! grammar. Both take a [`CsvOptions`] (separator, quote character, header
//! flag, text encoding) and both work one record at a time.
//!
//! ## Features
//!
//! - Configurable single-character separator and quote character
//! - Quoted fields containing separators, doubled quotes and line breaks
//! - Records spanning several physical lines are reassembled transparently
//! - Optional header row, read lazily and cached
//! - Any ASCII-compatible text encoding through `encoding_rs`
//! - Pluggable line sources and sinks
//!
//! ## Quick Start
//!
//! ```rust
//! use csv_codec::{CsvOptions, CsvReader, CsvWriter, LineTerminator, Record};
//!
//! let options = CsvOptions::new()
//!     .with_header(true)
//!     .with_line_terminator(LineTerminator::Lf);
//!
//! let mut writer = CsvWriter::from_writer(Vec::new(), options)?;
//! writer.set_header(["name", "comment"])?;
//! writer.write_record(["Ada", "said \"hi\", twice"])?;
//! let bytes = writer.into_inner()?.into_inner();
//! assert_eq!(bytes, b"name,comment\nAda,\"said \"\"hi\"\", twice\"\n");
//!
//! let mut reader = CsvReader::from_reader(&bytes[..], options)?;
//! assert_eq!(reader.header()?, Some(&Record::from(["name", "comment"])));
//! let record = reader.next_record()?.unwrap();
//! assert_eq!(record.get(1), Some("said \"hi\", twice"));
//! # Ok::<(), csv_codec::CsvError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`LineSource`] / [`LineSink`] - where physical lines come from and go to
//! - [`CsvReader`] - rebuilds records from a line source
//! - [`CsvWriter`] - serializes records to a line sink, one line per record
//! - [`io::escape`] - the quoting rules both sides share

#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod html;
pub mod io;
pub mod options;
pub mod record;

// Re-export commonly used types
pub use error::{CsvError, Result};
pub use options::{CsvOptions, LineTerminator};
pub use record::{HeaderIndex, Record};

// Re-export I/O types
pub use io::encoding::encoding_for_label;
pub use io::{
    parse_str, write_to_string, CsvReader, CsvWriter, FileCsvReader, FileCsvWriter, LineSink,
    LineSource, ReaderState, TextLineSink, TextLineSource, VecLineSource,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
