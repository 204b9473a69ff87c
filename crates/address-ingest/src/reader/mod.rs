//! Row readers for CSV files and piped streams.

mod file;
mod header;
mod stream;

pub use file::{is_csv_path, read_rows_from_file, resolve_input_path};
pub use header::{CsvHeaders, normalize_field, split_fields};
pub use stream::{parse_rows_from_str, read_rows_from_reader};
