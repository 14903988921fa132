//! Quote rules shared by the reader and the writer.
//!
//! The reader decides field boundaries with [`is_balanced`] and strips
//! quoting with [`unescape`]; the writer applies [`escape`], which is the
//! exact inverse for every field the writer can produce.

use std::borrow::Cow;

/// Line break put between two physical lines joined into one field when
/// the source does not report the terminator it read
pub const LINE_BREAK: &str = "\r\n";

/// Check whether a candidate field is complete.
///
/// A field is complete when it holds an even number of quote characters
/// and, if it starts with the quote character, also ends with it.
pub fn is_balanced(candidate: &str, quote: char) -> bool {
    let count = candidate.chars().filter(|&c| c == quote).count();
    if count % 2 != 0 {
        return false;
    }
    !candidate.starts_with(quote) || candidate.ends_with(quote)
}

/// Strip bounding quotes and collapse doubled quote characters.
///
/// Fields not wrapped in a quote pair come back unchanged. Returns `None`
/// for a field consisting of one lone quote character, which has no
/// valid reading.
pub fn unescape(raw: &str, quote: char) -> Option<Cow<'_, str>> {
    let inner = match raw.strip_prefix(quote) {
        Some(rest) => match rest.strip_suffix(quote) {
            Some(inner) => inner,
            None if rest.is_empty() => return None,
            None => return Some(Cow::Borrowed(raw)),
        },
        None => return Some(Cow::Borrowed(raw)),
    };

    let mut doubled = String::with_capacity(quote.len_utf8() * 2);
    doubled.push(quote);
    doubled.push(quote);
    if inner.contains(doubled.as_str()) {
        Some(Cow::Owned(inner.replace(doubled.as_str(), quote.encode_utf8(&mut [0; 4]))))
    } else {
        Some(Cow::Borrowed(inner))
    }
}

/// Check whether a field must be quoted on write
pub fn needs_quoting(field: &str, separator: char, quote: char) -> bool {
    field
        .chars()
        .any(|c| c == separator || c == quote || c == '\n' || c == '\r')
}

/// Quote a field if it contains the separator, the quote character or a
/// line break, doubling every interior quote character.
pub fn escape(field: &str, separator: char, quote: char) -> Cow<'_, str> {
    if !needs_quoting(field, separator, quote) {
        return Cow::Borrowed(field);
    }

    let mut escaped = String::with_capacity(field.len() + 2);
    escaped.push(quote);
    for c in field.chars() {
        if c == quote {
            escaped.push(quote);
        }
        escaped.push(c);
    }
    escaped.push(quote);
    Cow::Owned(escaped)
}
