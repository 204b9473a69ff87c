//! Address validation against an external verification provider.
//!
//! Addresses are split into batches of at most [`MAX_BATCH_SIZE`], sent
//! through an [`AddressProvider`] one batch at a time, and the best
//! candidate for each address is normalized back into an
//! [`Address`](address_model::Address).
//!
//! # Example
//!
//! ```ignore
//! use address_validate::{AddressValidator, Credentials, SmartyProvider};
//!
//! let credentials = Credentials::new(Some(auth_id), Some(auth_token))?;
//! let provider = SmartyProvider::new(credentials)?;
//! let results = AddressValidator::new(provider).validate(&addresses).await?;
//! ```

mod client;
mod credentials;
mod error;
mod format;
mod provider;
mod smarty;

pub use client::{AddressValidator, MAX_BATCH_SIZE};
pub use credentials::{AUTH_ID_ENV, AUTH_TOKEN_ENV, Credentials};
pub use error::{ProviderError, Result, ValidationError};
pub use format::{components_to_address, format_city, format_street, format_zip_code};
pub use provider::{
    AddressProvider, Candidate, Components, DEFAULT_MAX_CANDIDATES, Lookup, LookupResult,
};
pub use smarty::{DEFAULT_BASE_URL, SmartyProvider};
