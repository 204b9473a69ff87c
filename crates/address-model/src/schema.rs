//! Required field-name schemas for row input.

use std::collections::BTreeSet;
use std::fmt;

pub const STREET_FIELD: &str = "Street";
pub const CITY_FIELD: &str = "City";
pub const ZIP_CODE_FIELD: &str = "Zip Code";

/// Fields an address row must carry, no more and no fewer.
pub const ADDRESS_SCHEMA: [&str; 3] = [STREET_FIELD, CITY_FIELD, ZIP_CODE_FIELD];

/// Ordered list of required field names.
///
/// The order is kept for display; comparisons against a row treat the
/// schema as a set. An empty schema disables enforcement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<String>,
}

impl Schema {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Schema that accepts any set of fields.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The fixed `Street`, `City`, `Zip Code` schema.
    pub fn address() -> Self {
        Self::new(ADDRESS_SCHEMA)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|name| name == field)
    }

    pub fn field_set(&self) -> BTreeSet<&str> {
        self.fields.iter().map(String::as_str).collect()
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fields.join(", "))
    }
}
