//! Exact-match schema checks for header and row field names.

use std::collections::BTreeSet;

use address_model::Schema;

/// Returns true if `field_names` is exactly the schema's field set.
///
/// An empty schema accepts anything. Names are compared verbatim: no case
/// folding and no whitespace normalization.
pub fn matches_schema<'a, I>(schema: &Schema, field_names: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    if schema.is_empty() {
        return true;
    }
    let found: BTreeSet<&str> = field_names.into_iter().collect();
    found == schema.field_set()
}
