//! Buffered reader for piped input.
//!
//! The whole stream is read into memory before parsing; there is no
//! row-at-a-time backpressure.

use std::io::Read;

use tracing::debug;

use address_model::{Row, Schema};

use crate::error::{IngestError, Result};

use super::header::{CsvHeaders, schema_violation, split_fields};

/// Reads all of `reader` and parses it as comma-delimited rows.
pub fn read_rows_from_reader<R: Read>(mut reader: R, schema: &Schema) -> Result<Vec<Row>> {
    let mut buffer = String::new();
    reader
        .read_to_string(&mut buffer)
        .map_err(IngestError::StreamRead)?;
    debug!(bytes = buffer.len(), "buffered input stream");
    parse_rows_from_str(&buffer, schema)
}

/// Parses buffered delimited text.
///
/// Input that is empty after trimming yields no rows and skips schema
/// enforcement. Otherwise the first line is the header and is checked before
/// any data line; every data line must have exactly as many fields as the
/// header.
pub fn parse_rows_from_str(input: &str, schema: &Schema) -> Result<Vec<Row>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let mut lines = trimmed.split('\n');
    let headers = CsvHeaders::parse_line(lines.next().unwrap_or_default());
    headers.ensure_matches(schema)?;

    let mut rows = Vec::new();
    for (idx, line) in lines.enumerate() {
        let line_number = idx as u64 + 2;
        let values: Vec<&str> = split_fields(line).collect();
        if values.len() != headers.len() {
            return Err(schema_violation(schema, values, line_number));
        }
        rows.push(Row::from_pairs(headers.iter(), values));
    }
    debug!(rows = rows.len(), "parsed piped rows");
    Ok(rows)
}
