//! Address row ingestion.
//!
//! This crate reads comma-delimited address records from files or piped
//! input and turns them into [`Address`](address_model::Address) values.
//!
//! # Features
//!
//! - **Schema Enforcement**: header and row field names must exactly match a [`Schema`](address_model::Schema)
//! - **File Reading**: `csv`-backed reader with field trimming and strict field counts
//! - **Stream Reading**: buffered reader for piped input with naive comma splitting
//! - **Mapping**: fixed `Street`/`City`/`Zip Code` row mapping
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use address_ingest::{read_rows_from_file, rows_to_addresses};
//! use address_model::Schema;
//!
//! let rows = read_rows_from_file(Path::new("addresses.csv"), &Schema::address())?;
//! let addresses = rows_to_addresses(&rows);
//! ```

mod error;
mod mapper;
mod reader;
mod schema;

// === Error Types ===
pub use error::{IngestError, Result};

// === Schema ===
pub use schema::matches_schema;

// === CSV Reading ===
pub use reader::{
    CsvHeaders, is_csv_path, normalize_field, parse_rows_from_str, read_rows_from_file,
    read_rows_from_reader, resolve_input_path, split_fields,
};

// === Mapping ===
pub use mapper::{row_to_address, rows_to_addresses};
