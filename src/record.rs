//! Record and header types

use indexmap::IndexMap;
use std::ops::Index;

/// One logical row of fields.
///
/// Field order is column order. Records carry no fixed arity: two records
/// read from the same source may have different lengths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Create an empty record with room for `capacity` fields
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Append a field
    pub fn push(&mut self, field: impl Into<String>) {
        self.fields.push(field.into());
    }

    /// Get a field by position
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Get a field by column name
    pub fn get_by_name(&self, header: &HeaderIndex, name: &str) -> Option<&str> {
        header.position(name).and_then(|index| self.get(index))
    }

    /// Get the number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over the fields
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    /// Borrow the fields as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.fields
    }

    /// Take the fields out of the record
    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }
}

impl From<Vec<String>> for Record {
    fn from(fields: Vec<String>) -> Self {
        Self { fields }
    }
}

impl From<Vec<&str>> for Record {
    fn from(fields: Vec<&str>) -> Self {
        fields.into_iter().collect()
    }
}

impl<const N: usize> From<[&str; N]> for Record {
    fn from(fields: [&str; N]) -> Self {
        fields.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Index<usize> for Record {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.fields[index]
    }
}

impl IntoIterator for Record {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl PartialEq<[&str]> for Record {
    fn eq(&self, other: &[&str]) -> bool {
        self.fields.len() == other.len() && self.fields.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for Record {
    fn eq(&self, other: &[&str; N]) -> bool {
        self == &other[..]
    }
}

/// Column name lookup built from a header record.
///
/// Names keep header order; when a name appears more than once the first
/// column wins.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    positions: IndexMap<String, usize>,
}

impl HeaderIndex {
    /// Build the index from a header record
    pub fn new(header: &Record) -> Self {
        let mut positions = IndexMap::with_capacity(header.len());
        for (index, name) in header.iter().enumerate() {
            positions.entry(name.to_string()).or_insert(index);
        }
        Self { positions }
    }

    /// Position of the column with the given name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Check if a column exists
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Number of distinct column names
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if the header has no columns
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Column names in header order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.positions.keys().map(String::as_str)
    }
}

impl From<&Record> for HeaderIndex {
    fn from(header: &Record) -> Self {
        Self::new(header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_basics() {
        let mut record = Record::new();
        assert!(record.is_empty());
        record.push("a");
        record.push(String::from("b"));
        assert_eq!(record.len(), 2);
        assert_eq!(record.get(0), Some("a"));
        assert_eq!(record.get(2), None);
        assert_eq!(&record[1], "b");
        assert_eq!(record, ["a", "b"]);
    }

    #[test]
    fn test_record_from_conversions() {
        let a = Record::from(vec!["x".to_string(), "y".to_string()]);
        let b = Record::from(vec!["x", "y"]);
        let c: Record = ["x", "y"].into();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(c.into_fields(), vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_header_index_lookup() {
        let header = Record::from(["id", "name", "city"]);
        let index = HeaderIndex::new(&header);
        let row = Record::from(["7", "Ada", "London"]);

        assert_eq!(index.len(), 3);
        assert_eq!(index.position("city"), Some(2));
        assert_eq!(row.get_by_name(&index, "name"), Some("Ada"));
        assert_eq!(row.get_by_name(&index, "missing"), None);
        assert_eq!(index.names().collect::<Vec<_>>(), vec!["id", "name", "city"]);
    }

    #[test]
    fn test_header_index_first_duplicate_wins() {
        let header = Record::from(["a", "b", "a"]);
        let index = HeaderIndex::from(&header);
        assert_eq!(index.position("a"), Some(0));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_short_record_by_name() {
        let index = HeaderIndex::new(&Record::from(["a", "b", "c"]));
        let short = Record::from(["1"]);
        assert_eq!(short.get_by_name(&index, "c"), None);
    }
}
