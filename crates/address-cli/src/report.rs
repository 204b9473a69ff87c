//! One human-readable line per validation result.

use std::io::{self, Write};

use address_model::ValidationResult;

pub const INVALID_ADDRESS: &str = "Invalid Address";

/// `<original> -> <normalized>` or `<original> -> Invalid Address`.
pub fn render_result(result: &ValidationResult) -> String {
    match result {
        ValidationResult::Valid {
            address,
            original_address,
        } => format!("{original_address} -> {address}"),
        ValidationResult::Invalid { original_address } => {
            format!("{original_address} -> {INVALID_ADDRESS}")
        }
    }
}

pub fn print_results<W: Write>(out: &mut W, results: &[ValidationResult]) -> io::Result<()> {
    for result in results {
        writeln!(out, "{}", render_result(result))?;
    }
    out.flush()
}
