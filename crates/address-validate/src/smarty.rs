//! Smarty US Street API provider.
//!
//! Sends each batch as one `POST` with a JSON array of lookups. Smarty
//! answers with a flat array of candidates tagged by `input_index`; inputs
//! without a match are simply absent, so candidates are regrouped into one
//! [`LookupResult`] per submitted lookup.
//!
//! Credentials travel as query parameters and are never logged.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::credentials::Credentials;
use crate::error::{ProviderError, Result, ValidationError};
use crate::provider::{AddressProvider, Candidate, Components, Lookup, LookupResult};

/// Production endpoint for US street address lookups.
pub const DEFAULT_BASE_URL: &str = "https://us-street.api.smarty.com/street-address";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const CLIENT_USER_AGENT: &str = concat!("address-verify/", env!("CARGO_PKG_VERSION"));

// === Internal Wire Types (match Smarty JSON exactly) ===

#[derive(Debug, Serialize)]
struct WireLookup<'a> {
    input_id: String,
    street: &'a str,
    city: &'a str,
    zipcode: &'a str,
    candidates: u8,
}

#[derive(Debug, Deserialize)]
struct WireCandidate {
    input_index: usize,
    #[serde(default)]
    components: Option<Components>,
}

// === SmartyProvider ===

/// [`AddressProvider`] backed by the Smarty HTTP API.
#[derive(Debug, Clone)]
pub struct SmartyProvider {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
}

impl SmartyProvider {
    /// Creates a provider pointed at [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::HttpClient` if the HTTP client fails to
    /// initialize. Credentials are validated by [`Credentials::new`] before
    /// this point, so no network call happens without them.
    pub fn new(credentials: Credentials) -> Result<Self> {
        let base_url = Url::parse(DEFAULT_BASE_URL).map_err(|e| ValidationError::InvalidBaseUrl {
            url: DEFAULT_BASE_URL.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            http: build_http_client()?,
            base_url,
            credentials,
        })
    }

    /// Points the provider at another endpoint (e.g. a local mock server).
    pub fn with_base_url(mut self, url: &str) -> Result<Self> {
        self.base_url = Url::parse(url).map_err(|e| ValidationError::InvalidBaseUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        Ok(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn request_url(&self) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("auth-id", self.credentials.auth_id())
            .append_pair("auth-token", self.credentials.auth_token());
        url
    }
}

#[async_trait]
impl AddressProvider for SmartyProvider {
    async fn lookup_batch(
        &self,
        lookups: &[Lookup],
    ) -> std::result::Result<Vec<LookupResult>, ProviderError> {
        let body: Vec<WireLookup<'_>> = lookups
            .iter()
            .enumerate()
            .map(|(idx, lookup)| WireLookup {
                input_id: idx.to_string(),
                street: &lookup.street,
                city: &lookup.city,
                zipcode: &lookup.zip_code,
                candidates: lookup.max_candidates,
            })
            .collect();

        debug!(
            path = self.base_url.path(),
            lookups = lookups.len(),
            "[Smarty] POST batch"
        );
        let response = self
            .http
            .post(self.request_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(describe_transport_error(e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "[Smarty] batch rejected");
            return Err(status_error(status, detail.trim()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(describe_transport_error(e)))?;
        let candidates: Vec<WireCandidate> = serde_json::from_str(&text)
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;
        group_candidates(lookups.len(), candidates)
    }
}

/// Builds one result slot per lookup and files each candidate under its
/// `input_index`, keeping Smarty's candidate order.
fn group_candidates(
    lookup_count: usize,
    candidates: Vec<WireCandidate>,
) -> std::result::Result<Vec<LookupResult>, ProviderError> {
    let mut results = vec![LookupResult::default(); lookup_count];
    for candidate in candidates {
        let slot = results.get_mut(candidate.input_index).ok_or_else(|| {
            ProviderError::Malformed(format!(
                "candidate for input {} but only {} lookups were sent",
                candidate.input_index, lookup_count
            ))
        })?;
        slot.candidates.push(Candidate {
            components: candidate.components,
        });
    }
    Ok(results)
}

fn status_error(status: StatusCode, detail: &str) -> ProviderError {
    let reason = match status {
        StatusCode::BAD_REQUEST => "malformed request payload",
        StatusCode::UNAUTHORIZED => "authentication failed; check SMARTY_AUTH_ID and SMARTY_AUTH_TOKEN",
        StatusCode::PAYMENT_REQUIRED => "no active subscription for this account",
        StatusCode::PAYLOAD_TOO_LARGE => "request body too large",
        StatusCode::TOO_MANY_REQUESTS => "rate limit exceeded",
        _ => status.canonical_reason().unwrap_or("unexpected status"),
    };
    let message = if detail.is_empty() {
        reason.to_string()
    } else {
        format!("{reason} ({detail})")
    };
    ProviderError::Status {
        status: status.as_u16(),
        message,
    }
}

/// Describes a transport error without echoing the request URL, which
/// carries credentials.
fn describe_transport_error(error: reqwest::Error) -> String {
    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        "could not connect to provider".to_string()
    } else {
        error.without_url().to_string()
    }
}

/// Builds the configured HTTP client.
fn build_http_client() -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .build()
        .map_err(|e| ValidationError::HttpClient(e.to_string()))
}

// === Tests ===
