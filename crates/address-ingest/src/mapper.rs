//! Row to address mapping.

use address_model::{Address, CITY_FIELD, Row, STREET_FIELD, ZIP_CODE_FIELD};

/// Maps an address row onto an [`Address`].
///
/// Assumes the row already passed the address schema; absent or missing
/// cells become empty strings.
pub fn row_to_address(row: &Row) -> Address {
    let field = |name: &str| row.text(name).unwrap_or_default().to_string();
    Address {
        street: field(STREET_FIELD),
        city: field(CITY_FIELD),
        zip_code: field(ZIP_CODE_FIELD),
    }
}

pub fn rows_to_addresses(rows: &[Row]) -> Vec<Address> {
    rows.iter().map(row_to_address).collect()
}
