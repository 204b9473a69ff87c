//! Batched address validation.

use tracing::{Instrument, debug, info, info_span};

use address_model::{Address, ValidationResult};

use crate::error::{ProviderError, Result, ValidationError};
use crate::format::components_to_address;
use crate::provider::{AddressProvider, Lookup, LookupResult};

/// Largest number of addresses submitted in one provider call.
pub const MAX_BATCH_SIZE: usize = 10;

/// Validates addresses through an [`AddressProvider`], one batch at a time.
///
/// Batches run sequentially so provider load stays bounded and results come
/// back in input order. Any provider failure aborts the whole call.
#[derive(Debug, Clone)]
pub struct AddressValidator<P> {
    provider: P,
}

impl<P: AddressProvider> AddressValidator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns one result per address, in input order.
    ///
    /// # Errors
    ///
    /// `ValidationError::Provider` if any batch fails or comes back with a
    /// result count different from the number of lookups sent. No partial
    /// results are returned.
    pub async fn validate(&self, addresses: &[Address]) -> Result<Vec<ValidationResult>> {
        let span = info_span!("validate", addresses = addresses.len());
        async {
            let mut results = Vec::with_capacity(addresses.len());
            for (batch_index, batch) in addresses.chunks(MAX_BATCH_SIZE).enumerate() {
                debug!(batch_index, size = batch.len(), "submitting batch");
                let lookups: Vec<Lookup> = batch.iter().map(Lookup::from_address).collect();
                let response = self
                    .provider
                    .lookup_batch(&lookups)
                    .await
                    .map_err(ValidationError::Provider)?;
                if response.len() != batch.len() {
                    return Err(ValidationError::Provider(ProviderError::MissingResults {
                        expected: batch.len(),
                        actual: response.len(),
                    }));
                }
                results.extend(
                    batch
                        .iter()
                        .zip(&response)
                        .map(|(original, result)| classify(original, result)),
                );
            }
            let valid = results.iter().filter(|r| r.is_valid()).count();
            info!(
                valid,
                invalid = results.len() - valid,
                "validation complete"
            );
            Ok::<_, ValidationError>(results)
        }
        .instrument(span)
        .await
    }

    /// Validates a single address.
    pub async fn validate_one(&self, address: &Address) -> Result<ValidationResult> {
        self.validate(std::slice::from_ref(address))
            .await?
            .into_iter()
            .next()
            .ok_or(ValidationError::Provider(ProviderError::MissingResults {
                expected: 1,
                actual: 0,
            }))
    }
}

fn classify(original: &Address, result: &LookupResult) -> ValidationResult {
    match result.best_match() {
        Some(components) => ValidationResult::Valid {
            address: components_to_address(components),
            original_address: original.clone(),
        },
        None => ValidationResult::Invalid {
            original_address: original.clone(),
        },
    }
}
