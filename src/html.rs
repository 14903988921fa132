//! HTML table rendering of CSV input

use crate::error::Result;
use crate::io::{CsvReader, LineSource};
use crate::record::Record;
use std::borrow::Cow;
use std::io::Write;

/// Escape markup characters and turn line breaks into `<br />`
pub fn escape_html(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\r', '\n']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 16);
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                escaped.push_str("<br />");
            }
            '\n' => escaped.push_str("<br />"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Render the reader's content as a complete HTML document.
///
/// The header, if the reader has one, goes into `<thead>` as `th` cells;
/// every record becomes a `<tbody>` row of `td` cells.
pub fn write_html_document<S, W>(title: &str, reader: &mut CsvReader<S>, out: &mut W) -> Result<usize>
where
    S: LineSource,
    W: Write,
{
    let title = escape_html(title);
    writeln!(out, "<!DOCTYPE HTML>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "\t<head>")?;
    writeln!(out, "\t\t<title>{}</title>", title)?;
    writeln!(out, "\t</head>")?;
    writeln!(out, "\t<body>")?;
    writeln!(out, "\t\t<h1>{}</h1>", title)?;

    let rows = write_table(reader, out)?;

    writeln!(out, "\t</body>")?;
    writeln!(out, "</html>")?;
    Ok(rows)
}

/// Render the `<table>` element only. Returns the number of body rows.
pub fn write_table<S, W>(reader: &mut CsvReader<S>, out: &mut W) -> Result<usize>
where
    S: LineSource,
    W: Write,
{
    writeln!(out, "\t\t<table>")?;

    if let Some(header) = reader.header()? {
        writeln!(out, "\t\t\t<thead>")?;
        write_row(out, header, "th")?;
        writeln!(out, "\t\t\t</thead>")?;
    }

    writeln!(out, "\t\t\t<tbody>")?;
    let mut rows = 0;
    while let Some(record) = reader.next_record()? {
        write_row(out, &record, "td")?;
        rows += 1;
    }
    writeln!(out, "\t\t\t</tbody>")?;

    writeln!(out, "\t\t</table>")?;
    Ok(rows)
}

fn write_row<W: Write>(out: &mut W, record: &Record, element: &str) -> Result<()> {
    writeln!(out, "\t\t\t\t<tr>")?;
    for value in record.iter() {
        writeln!(out, "\t\t\t\t\t<{0}>{1}</{0}>", element, escape_html(value))?;
    }
    writeln!(out, "\t\t\t\t</tr>")?;
    Ok(())
}
