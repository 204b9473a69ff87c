use crate::Address;

/// Outcome of validating one input address.
///
/// Produced exactly once per input address, in input order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationResult {
    /// The provider matched the address; `address` is the normalized form.
    Valid {
        address: Address,
        original_address: Address,
    },
    /// The provider returned no usable match.
    Invalid { original_address: Address },
}

impl ValidationResult {
    pub fn original_address(&self) -> &Address {
        match self {
            Self::Valid {
                original_address, ..
            }
            | Self::Invalid { original_address } => original_address,
        }
    }

    /// Normalized address, present only for valid results.
    pub fn address(&self) -> Option<&Address> {
        match self {
            Self::Valid { address, .. } => Some(address),
            Self::Invalid { .. } => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}
