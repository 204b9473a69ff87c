//! Header parsing and schema checks shared by the file and stream readers.

use address_model::Schema;

use crate::error::{IngestError, Result};
use crate::schema::matches_schema;

/// Column names taken from the first input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeaders {
    /// Trimmed column names in input order.
    pub columns: Vec<String>,
}

impl CsvHeaders {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Parses a raw header line with naive comma splitting.
    pub fn parse_line(line: &str) -> Self {
        Self::new(split_fields(line).map(str::to_string).collect())
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    /// Checks the header against `schema` before any row is read.
    ///
    /// The column count must equal the number of distinct schema fields.
    pub fn ensure_matches(&self, schema: &Schema) -> Result<()> {
        let exact_count = schema.is_empty() || self.len() == schema.field_set().len();
        if exact_count && matches_schema(schema, self.iter()) {
            Ok(())
        } else {
            Err(schema_violation(schema, self.iter(), 1))
        }
    }
}

/// Trims surrounding whitespace from a field.
pub fn normalize_field(value: &str) -> &str {
    value.trim()
}

/// Splits a line on commas and trims each field. Quotes are not interpreted.
pub fn split_fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(',').map(normalize_field)
}

pub(crate) fn schema_violation<'a, I>(schema: &Schema, found: I, line: u64) -> IngestError
where
    I: IntoIterator<Item = &'a str>,
{
    IngestError::InvalidSchema {
        line,
        expected: schema.fields().to_vec(),
        found: found.into_iter().map(str::to_string).collect(),
    }
}
