//! Provider credentials.

use secrecy::{ExposeSecret, SecretString};

use crate::error::{Result, ValidationError};

pub const AUTH_ID_ENV: &str = "SMARTY_AUTH_ID";
pub const AUTH_TOKEN_ENV: &str = "SMARTY_AUTH_TOKEN";

/// Auth id and token pair. Never printed by `Debug`.
#[derive(Clone)]
pub struct Credentials {
    auth_id: SecretString,
    auth_token: SecretString,
}

impl Credentials {
    /// Fails with [`ValidationError::MissingCredentials`] if either value is
    /// absent or blank.
    pub fn new(auth_id: Option<String>, auth_token: Option<String>) -> Result<Self> {
        match (non_blank(auth_id), non_blank(auth_token)) {
            (Some(auth_id), Some(auth_token)) => Ok(Self {
                auth_id: SecretString::from(auth_id),
                auth_token: SecretString::from(auth_token),
            }),
            _ => Err(ValidationError::MissingCredentials),
        }
    }

    pub(crate) fn auth_id(&self) -> &str {
        self.auth_id.expose_secret()
    }

    pub(crate) fn auth_token(&self) -> &str {
        self.auth_token.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("auth_id", &"[REDACTED]")
            .field("auth_token", &"[REDACTED]")
            .finish()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
