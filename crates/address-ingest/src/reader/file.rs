//! Schema-enforcing CSV file reader.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use address_model::{Row, Schema};

use crate::error::{IngestError, Result};
use crate::schema::matches_schema;

use super::header::{CsvHeaders, schema_violation};

/// Naive extension check: true when the path ends in `.csv` (any case).
///
/// The content is not inspected.
pub fn is_csv_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Joins a relative path to the current working directory; absolute paths
/// are returned unchanged.
pub fn resolve_input_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(cwd.join(path))
}

/// Reads every data row from a CSV file, enforcing `schema`.
///
/// The header is checked once before any record is read, then each record
/// is checked as it is produced. The first violation aborts the read and
/// discards the rows collected so far. A record whose field count differs
/// from the header is a schema violation. A completely empty file yields no
/// rows regardless of schema.
pub fn read_rows_from_file(path: &Path, schema: &Schema) -> Result<Vec<Row>> {
    let path = resolve_input_path(path)?;
    let file = File::open(&path).map_err(|source| IngestError::FileRead {
        path: path.clone(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|error| map_csv_error(&path, schema, error))?;
    let headers = CsvHeaders::new(headers.iter().map(str::to_string).collect());
    if headers.is_empty() {
        debug!(path = %path.display(), "empty CSV file");
        return Ok(Vec::new());
    }
    headers.ensure_matches(schema)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| map_csv_error(&path, schema, error))?;
        let row = Row::from_pairs(headers.iter(), record.iter());
        if !matches_schema(schema, row.field_names()) {
            let line = record.position().map_or(0, csv::Position::line);
            return Err(schema_violation(schema, row.field_names(), line));
        }
        rows.push(row);
    }
    debug!(path = %path.display(), rows = rows.len(), "read CSV file");
    Ok(rows)
}

fn map_csv_error(path: &Path, schema: &Schema, error: csv::Error) -> IngestError {
    if let csv::ErrorKind::UnequalLengths { pos, len, .. } = error.kind() {
        let line = pos.as_ref().map_or(0, csv::Position::line);
        return IngestError::InvalidSchema {
            line,
            expected: schema.fields().to_vec(),
            found: vec![format!("{len} fields")],
        };
    }
    let message = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(source) => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_csv_path() {
        assert!(is_csv_path(Path::new("addresses.csv")));
        assert!(is_csv_path(Path::new("ADDRESSES.CSV")));
        assert!(!is_csv_path(Path::new("addresses.txt")));
        assert!(!is_csv_path(Path::new("csv")));
    }

    #[test]
    fn test_resolve_absolute_path_unchanged() {
        let absolute = std::env::temp_dir().join("input.csv");
        assert_eq!(resolve_input_path(&absolute).unwrap(), absolute);
    }

    #[test]
    fn test_resolve_relative_path_against_cwd() {
        let resolved = resolve_input_path(Path::new("input.csv")).unwrap();
        assert_eq!(
            resolved,
            std::env::current_dir().unwrap().join("input.csv")
        );
    }
}
