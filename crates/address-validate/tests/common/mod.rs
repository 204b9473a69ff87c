#![allow(dead_code)]

//! Deterministic provider doubles.

use std::sync::Mutex;

use address_validate::{AddressProvider, Components, Lookup, LookupResult, ProviderError};
use async_trait::async_trait;

/// Echoes each lookup back as a match.
///
/// City `Invalid` yields no candidates; city `Error` fails the whole batch.
#[derive(Default)]
pub struct EchoProvider {
    pub batches: Mutex<Vec<usize>>,
}

impl EchoProvider {
    pub fn batch_sizes(&self) -> Vec<usize> {
        self.batches.lock().unwrap().clone()
    }
}

#[async_trait]
impl AddressProvider for EchoProvider {
    async fn lookup_batch(&self, lookups: &[Lookup]) -> Result<Vec<LookupResult>, ProviderError> {
        self.batches.lock().unwrap().push(lookups.len());
        lookups
            .iter()
            .map(|lookup| match lookup.city.as_str() {
                "Error" => Err(ProviderError::Other("simulated provider outage".to_string())),
                "Invalid" => Ok(LookupResult::no_match()),
                _ => Ok(LookupResult::matched(echo_components(lookup))),
            })
            .collect()
    }
}

/// Splits the street as `<number> <name...> <suffix>` and the zip on `-`.
pub fn echo_components(lookup: &Lookup) -> Components {
    let parts: Vec<&str> = lookup.street.split(' ').collect();
    let (primary, rest) = parts.split_first().map_or(("", &[][..]), |(p, r)| (*p, r));
    let (suffix, name) = rest.split_last().map_or(("", &[][..]), |(s, n)| (*s, n));
    let mut zip = lookup.zip_code.splitn(2, '-');
    Components {
        primary_number: Some(primary.to_string()),
        street_name: Some(name.join(" ")),
        street_suffix: Some(suffix.to_string()),
        city_name: Some(lookup.city.clone()),
        zipcode: zip.next().map(str::to_string),
        plus4_code: zip.next().map(str::to_string),
        ..Components::default()
    }
}

/// Always drops the last result of every batch.
pub struct ShortProvider;

#[async_trait]
impl AddressProvider for ShortProvider {
    async fn lookup_batch(&self, lookups: &[Lookup]) -> Result<Vec<LookupResult>, ProviderError> {
        Ok(lookups
            .iter()
            .skip(1)
            .map(|lookup| LookupResult::matched(echo_components(lookup)))
            .collect())
    }
}
