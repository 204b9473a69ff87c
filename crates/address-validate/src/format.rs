//! Candidate normalization into [`Address`] values.

use address_model::Address;

use crate::provider::Components;

fn join_present<'a, I>(parts: I, separator: &str) -> String
where
    I: IntoIterator<Item = &'a Option<String>>,
{
    parts
        .into_iter()
        .filter_map(|part| part.as_deref().map(str::trim))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Number, pre-direction, name, suffix and post-direction, single-spaced.
pub fn format_street(components: &Components) -> String {
    join_present(
        [
            &components.primary_number,
            &components.street_predirection,
            &components.street_name,
            &components.street_suffix,
            &components.street_postdirection,
        ],
        " ",
    )
}

/// City name only; urbanization and state are left out.
pub fn format_city(components: &Components) -> String {
    join_present([&components.city_name], " ")
}

/// `zip` or `zip-plus4`.
pub fn format_zip_code(components: &Components) -> String {
    join_present([&components.zipcode, &components.plus4_code], "-")
}

pub fn components_to_address(components: &Components) -> Address {
    Address {
        street: format_street(components),
        city: format_city(components),
        zip_code: format_zip_code(components),
    }
}
