//! Normalized street/city/zip triple.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// The unit sent to validation and compared in output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    /// Always held as text; numeric input is coerced on deserialization.
    #[serde(deserialize_with = "zip_code_from_text_or_number")]
    pub zip_code: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            zip_code: zip_code.into(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.street, self.city, self.zip_code)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

fn zip_code_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(value) => value,
        TextOrNumber::Unsigned(value) => value.to_string(),
        TextOrNumber::Signed(value) => value.to_string(),
        TextOrNumber::Float(value) => value.to_string(),
    })
}
