// ── Config subtree normalization ──
//
// Turns the raw `showConfig` payload for one interface into a
// `NormalizedInterfaceConfig`. Missing leaves get their documented defaults;
// malformed leaves are errors that name the offending field.

use serde_json::Value;
use thiserror::Error;

use crate::decode::{DecodeError, DecodeErrorKind, JsonKind, decode_string_list};
use crate::model::NormalizedInterfaceConfig;
use crate::remote::RawConfigNode;

/// Leaf holding the interface's CIDR addresses (string or array).
pub const ADDRESS_FIELD: &str = "address";
/// Leaf holding the interface's MAC address.
pub const HW_ID_FIELD: &str = "hw-id";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizationError {
    #[error("expected a configuration mapping, found {found}")]
    NotAMapping { found: JsonKind },

    #[error("field '{field}': {source}")]
    Field {
        field: &'static str,
        #[source]
        source: DecodeError,
    },
}

impl NormalizationError {
    /// The underlying decode failure kind, if a field failed to decode.
    pub fn decode_kind(&self) -> Option<DecodeErrorKind> {
        match self {
            Self::Field { source, .. } => Some(source.kind()),
            Self::NotAMapping { .. } => None,
        }
    }
}

pub fn normalize(node: &RawConfigNode) -> Result<NormalizedInterfaceConfig, NormalizationError> {
    let Value::Object(fields) = node else {
        return Err(NormalizationError::NotAMapping {
            found: JsonKind::of(Some(node)),
        });
    };

    // A freshly created interface has no address leaf at all.
    let addresses = match fields.get(ADDRESS_FIELD) {
        None => Vec::new(),
        present => decode_string_list(present).map_err(|source| NormalizationError::Field {
            field: ADDRESS_FIELD,
            source,
        })?,
    };

    let hw_id = match fields.get(HW_ID_FIELD) {
        None => String::new(),
        Some(Value::String(hw_id)) => hw_id.clone(),
        Some(other) => {
            return Err(NormalizationError::Field {
                field: HW_ID_FIELD,
                source: DecodeError::UnsupportedType {
                    found: JsonKind::of(Some(other)),
                },
            });
        }
    };

    Ok(NormalizedInterfaceConfig { addresses, hw_id })
}
