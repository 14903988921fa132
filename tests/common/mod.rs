//! Shared test utilities for csv_codec integration tests.

#![allow(dead_code)]

use csv_codec::{CsvOptions, CsvReader, CsvWriter, LineTerminator, Record, TextLineSource};
use std::io::BufReader;

/// Reader over an in-memory string
pub fn reader_for(text: &str, options: CsvOptions) -> CsvReader<TextLineSource<BufReader<&[u8]>>> {
    CsvReader::from_reader(text.as_bytes(), options)
        .unwrap_or_else(|e| panic!("Cannot create reader: {e:?}"))
}

/// Read every record, panicking on error
pub fn read_all(text: &str, options: CsvOptions) -> Vec<Record> {
    reader_for(text, options)
        .collect::<csv_codec::Result<Vec<_>>>()
        .unwrap_or_else(|e| panic!("Failed to read {text:?}: {e:?}"))
}

/// Options with `\n` line endings so expected output is platform independent
pub fn lf_options() -> CsvOptions {
    CsvOptions::default().with_line_terminator(LineTerminator::Lf)
}

/// Serialize records to a string with the given options
pub fn write_all(records: &[Record], options: CsvOptions) -> String {
    let mut writer = CsvWriter::from_writer(Vec::new(), options)
        .unwrap_or_else(|e| panic!("Cannot create writer: {e:?}"));
    writer
        .write_records(records)
        .unwrap_or_else(|e| panic!("Failed to write records: {e:?}"));
    let bytes = writer.into_inner().unwrap().into_inner();
    String::from_utf8(bytes).unwrap()
}

/// Build a record from string slices
pub fn rec(fields: &[&str]) -> Record {
    fields.iter().copied().collect()
}
