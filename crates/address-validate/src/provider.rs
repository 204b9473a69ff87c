//! Provider boundary: one batch lookup operation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use address_model::Address;

use crate::error::ProviderError;

/// Only the best candidate is requested per address.
pub const DEFAULT_MAX_CANDIDATES: u8 = 1;

/// One address query sent to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lookup {
    pub street: String,
    pub city: String,
    pub zip_code: String,
    pub max_candidates: u8,
}

impl Lookup {
    pub fn from_address(address: &Address) -> Self {
        Self {
            street: address.street.clone(),
            city: address.city.clone(),
            zip_code: address.zip_code.clone(),
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

/// Structured fields of a matched address. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Components {
    pub urbanization: Option<String>,
    pub primary_number: Option<String>,
    pub street_name: Option<String>,
    pub street_predirection: Option<String>,
    pub street_postdirection: Option<String>,
    pub street_suffix: Option<String>,
    pub city_name: Option<String>,
    pub state_abbreviation: Option<String>,
    pub zipcode: Option<String>,
    pub plus4_code: Option<String>,
}

impl Components {
    /// True when no field carries a non-empty value.
    pub fn is_empty(&self) -> bool {
        [
            &self.urbanization,
            &self.primary_number,
            &self.street_name,
            &self.street_predirection,
            &self.street_postdirection,
            &self.street_suffix,
            &self.city_name,
            &self.state_abbreviation,
            &self.zipcode,
            &self.plus4_code,
        ]
        .into_iter()
        .all(|field| field.as_deref().is_none_or(str::is_empty))
    }
}

/// A single structured match for one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidate {
    pub components: Option<Components>,
}

impl Candidate {
    pub fn new(components: Components) -> Self {
        Self {
            components: Some(components),
        }
    }
}

/// Candidates for one submitted lookup, best first. Empty means no match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupResult {
    pub candidates: Vec<Candidate>,
}

impl LookupResult {
    pub fn no_match() -> Self {
        Self::default()
    }

    pub fn matched(components: Components) -> Self {
        Self {
            candidates: vec![Candidate::new(components)],
        }
    }

    /// Components of the best candidate, if it has any usable fields.
    pub fn best_match(&self) -> Option<&Components> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.components.as_ref())
            .filter(|components| !components.is_empty())
    }
}

/// An external address-verification service.
///
/// Implementations return exactly one [`LookupResult`] per submitted
/// [`Lookup`], in submission order, or fail the whole batch.
#[async_trait]
pub trait AddressProvider: Send + Sync {
    async fn lookup_batch(&self, lookups: &[Lookup]) -> Result<Vec<LookupResult>, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_requests_single_candidate() {
        let lookup = Lookup::from_address(&Address::new("1 Empora St", "Title", "11111"));
        assert_eq!(lookup.max_candidates, 1);
        assert_eq!(lookup.zip_code, "11111");
    }

    #[test]
    fn best_match_skips_empty_components() {
        assert!(LookupResult::no_match().best_match().is_none());
        let bare = LookupResult {
            candidates: vec![Candidate::default()],
        };
        assert!(bare.best_match().is_none());
        let blank = LookupResult::matched(Components {
            city_name: Some(String::new()),
            ..Components::default()
        });
        assert!(blank.best_match().is_none());
    }

    #[test]
    fn best_match_takes_first_candidate() {
        let first = Components {
            city_name: Some("Columbus".to_string()),
            ..Components::default()
        };
        let second = Components {
            city_name: Some("Dayton".to_string()),
            ..Components::default()
        };
        let result = LookupResult {
            candidates: vec![Candidate::new(first.clone()), Candidate::new(second)],
        };
        assert_eq!(result.best_match(), Some(&first));
    }
}
