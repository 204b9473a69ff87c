pub mod address;
pub mod result;
pub mod schema;
pub mod table;

pub use address::Address;
pub use result::ValidationResult;
pub use schema::{ADDRESS_SCHEMA, CITY_FIELD, STREET_FIELD, Schema, ZIP_CODE_FIELD};
pub use table::{CellValue, Row};
