//! Pipeline tests with an in-process provider.

use std::fs;
use std::sync::Mutex;

use address_cli::input::InputSource;
use address_cli::pipeline::{read_addresses, validate_addresses};
use address_cli::report::{INVALID_ADDRESS, render_result};
use address_model::Address;
use address_validate::{
    AddressProvider, AddressValidator, Components, Lookup, LookupResult, ProviderError,
};
use async_trait::async_trait;
use tempfile::TempDir;

/// Echoes the lookup back as a match unless the city is `Invalid`.
#[derive(Default)]
struct EchoProvider {
    batches: Mutex<Vec<usize>>,
}

#[async_trait]
impl AddressProvider for EchoProvider {
    async fn lookup_batch(&self, lookups: &[Lookup]) -> Result<Vec<LookupResult>, ProviderError> {
        self.batches.lock().unwrap().push(lookups.len());
        Ok(lookups
            .iter()
            .map(|lookup| {
                if lookup.city == "Invalid" {
                    LookupResult::no_match()
                } else {
                    LookupResult::matched(Components {
                        street_name: Some(lookup.street.clone()),
                        city_name: Some(lookup.city.clone()),
                        zipcode: Some(lookup.zip_code.clone()),
                        ..Components::default()
                    })
                }
            })
            .collect())
    }
}

#[tokio::test]
async fn reads_file_and_validates_in_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("addresses.csv");
    let mut content = String::from("Street,City,Zip Code\n");
    for i in 0..12 {
        let city = if i % 3 == 0 { "Invalid" } else { "Columbus" };
        content.push_str(&format!("{i} Main St,{city},4321{}\n", i % 10));
    }
    fs::write(&path, content).unwrap();

    let addresses = read_addresses(InputSource::File(path)).await.unwrap();
    assert_eq!(addresses.len(), 12);
    assert_eq!(addresses[1], Address::new("1 Main St", "Columbus", "43211"));

    let validator = AddressValidator::new(EchoProvider::default());
    let results = validate_addresses(&validator, &addresses).await.unwrap();

    assert_eq!(*validator.provider().batches.lock().unwrap(), vec![10, 2]);
    assert_eq!(results.len(), addresses.len());
    for (result, address) in results.iter().zip(&addresses) {
        assert_eq!(result.original_address(), address);
        let line = render_result(result);
        if address.city == "Invalid" {
            assert_eq!(line, format!("{address} -> {INVALID_ADDRESS}"));
        } else {
            assert_eq!(line, format!("{address} -> {address}"));
        }
    }
}

#[tokio::test]
async fn missing_file_carries_path_context() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.csv");
    let err = read_addresses(InputSource::File(path.clone()))
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains(&path.display().to_string()));
}
