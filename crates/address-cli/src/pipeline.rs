//! Read -> map -> validate pipeline shared by the binary and tests.

use std::io;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{Instrument, info, info_span, trace};

use address_ingest::{read_rows_from_file, read_rows_from_reader, rows_to_addresses};
use address_model::{Address, Schema, ValidationResult};
use address_validate::{AddressProvider, AddressValidator};

use crate::input::InputSource;
use crate::logging::redact_value;

/// Reads and maps every address from `source`, enforcing the address schema.
///
/// Blocking reads run on tokio's blocking pool.
pub async fn read_addresses(source: InputSource) -> Result<Vec<Address>> {
    let span = info_span!("ingest", source = ?source);
    read_addresses_inner(source).instrument(span).await
}

async fn read_addresses_inner(source: InputSource) -> Result<Vec<Address>> {
    let start = Instant::now();
    let schema = Schema::address();
    let rows = match source.clone() {
        InputSource::File(path) => {
            info!(path = %path.display(), "reading provided file");
            tokio::task::spawn_blocking(move || read_rows_from_file(&path, &schema))
                .await
                .context("file reader task failed")?
        }
        InputSource::Stdin => {
            info!("reading piped input");
            tokio::task::spawn_blocking(move || read_rows_from_reader(io::stdin().lock(), &schema))
                .await
                .context("stdin reader task failed")?
        }
    }
    .with_context(|| match &source {
        InputSource::File(path) => format!("read {}", path.display()),
        InputSource::Stdin => "read stdin".to_string(),
    })?;

    let addresses = rows_to_addresses(&rows);
    for address in &addresses {
        trace!(address = redact_value(&address.to_string()), "parsed address");
    }
    info!(
        addresses = addresses.len(),
        duration_ms = start.elapsed().as_millis(),
        "addresses to validate"
    );
    Ok(addresses)
}

/// Validates `addresses` and returns one result per address, in order.
pub async fn validate_addresses<P: AddressProvider>(
    validator: &AddressValidator<P>,
    addresses: &[Address],
) -> Result<Vec<ValidationResult>> {
    let start = Instant::now();
    let results = validator.validate(addresses).await?;
    info!(
        results = results.len(),
        duration_ms = start.elapsed().as_millis(),
        "validation finished"
    );
    Ok(results)
}
