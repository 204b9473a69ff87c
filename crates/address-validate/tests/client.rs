//! Integration tests for the batched validation client.

mod common;

use address_model::{Address, ValidationResult};
use address_validate::{AddressValidator, MAX_BATCH_SIZE, ProviderError, ValidationError};

use common::{EchoProvider, ShortProvider};

fn addresses(count: usize) -> Vec<Address> {
    (0..count)
        .map(|i| Address::new(format!("{i} Empora St"), "Columbus", format!("4{i:04}")))
        .collect()
}

#[tokio::test]
async fn valid_and_invalid_scenario() {
    let validator = AddressValidator::new(EchoProvider::default());
    let input = vec![
        Address::new("143 e Maine Street", "Columbus", "43215"),
        Address::new("1 Empora St", "Invalid", "11111"),
    ];

    let results = validator.validate(&input).await.expect("validate");

    assert_eq!(
        results,
        vec![
            ValidationResult::Valid {
                address: input[0].clone(),
                original_address: input[0].clone(),
            },
            ValidationResult::Invalid {
                original_address: input[1].clone(),
            },
        ]
    );
}

#[tokio::test]
async fn preserves_order_across_batch_boundaries() {
    for count in [0, 1, 10, 11, 21] {
        let provider = EchoProvider::default();
        let validator = AddressValidator::new(provider);
        let input = addresses(count);

        let results = validator.validate(&input).await.expect("validate");

        assert_eq!(results.len(), input.len(), "count {count}");
        for (result, original) in results.iter().zip(&input) {
            assert_eq!(result.original_address(), original);
        }
    }
}

#[tokio::test]
async fn batches_are_at_most_ten() {
    let validator = AddressValidator::new(EchoProvider::default());
    validator.validate(&addresses(21)).await.expect("validate");
    assert_eq!(validator.provider().batch_sizes(), vec![10, 10, 1]);
    assert_eq!(MAX_BATCH_SIZE, 10);
}

#[tokio::test]
async fn empty_input_makes_no_calls() {
    let validator = AddressValidator::new(EchoProvider::default());
    let results = validator.validate(&[]).await.expect("validate");
    assert!(results.is_empty());
    assert!(validator.provider().batch_sizes().is_empty());
}

#[tokio::test]
async fn result_count_mismatch_fails_whole_call() {
    let validator = AddressValidator::new(ShortProvider);
    let err = validator.validate(&addresses(3)).await.unwrap_err();
    assert!(matches!(
        err,
        ValidationError::Provider(ProviderError::MissingResults {
            expected: 3,
            actual: 2
        })
    ));
    assert!(err.to_string().starts_with("Error validating addresses:"));
}

#[tokio::test]
async fn provider_error_in_later_batch_discards_earlier_results() {
    let validator = AddressValidator::new(EchoProvider::default());
    let mut input = addresses(15);
    input[12].city = "Error".to_string();

    let err = validator.validate(&input).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Error validating addresses: simulated provider outage"
    );
    assert_eq!(validator.provider().batch_sizes(), vec![10, 5]);
}

#[tokio::test]
async fn normalizes_best_candidate() {
    let validator = AddressValidator::new(EchoProvider::default());
    let result = validator
        .validate_one(&Address::new("1600 Amphitheatre Pkwy", "Mountain View", "94043-1351"))
        .await
        .expect("validate");
    assert_eq!(
        result.address(),
        Some(&Address::new(
            "1600 Amphitheatre Pkwy",
            "Mountain View",
            "94043-1351"
        ))
    );
}
