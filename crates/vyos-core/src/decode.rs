// ── Polymorphic list decoding ──
//
// VyOS emits multi-valued leaves as a bare string when there is exactly one
// value and as an array otherwise. `decode_string_list` folds both shapes
// into one ordered `Vec<String>` and rejects everything else.

use serde_json::Value;
use thiserror::Error;

/// Shape of a JSON value, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum JsonKind {
    Absent,
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: Option<&Value>) -> Self {
        match value {
            None => Self::Absent,
            Some(Value::Null) => Self::Null,
            Some(Value::Bool(_)) => Self::Bool,
            Some(Value::Number(_)) => Self::Number,
            Some(Value::String(_)) => Self::String,
            Some(Value::Array(_)) => Self::Array,
            Some(Value::Object(_)) => Self::Object,
        }
    }
}

/// Coarse classification of a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum DecodeErrorKind {
    /// An array held something other than a string.
    UnsupportedElementType,
    /// The value was neither a string nor an array.
    UnsupportedType,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unsupported element type: expected string at index {index}, found {found}")]
    UnsupportedElementType { index: usize, found: JsonKind },

    #[error("unsupported type: expected string or array of strings, found {found}")]
    UnsupportedType { found: JsonKind },
}

impl DecodeError {
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            Self::UnsupportedElementType { .. } => DecodeErrorKind::UnsupportedElementType,
            Self::UnsupportedType { .. } => DecodeErrorKind::UnsupportedType,
        }
    }
}

/// Decode a "one or more strings" value into an ordered sequence.
///
/// Input order is kept as-is. A bad array element fails the whole decode;
/// no partial result is returned.
pub fn decode_string_list(value: Option<&Value>) -> Result<Vec<String>, DecodeError> {
    match value {
        Some(Value::String(single)) => Ok(vec![single.clone()]),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(DecodeError::UnsupportedElementType {
                    index,
                    found: JsonKind::of(Some(other)),
                }),
            })
            .collect(),
        None | Some(Value::Null | Value::Bool(_) | Value::Number(_) | Value::Object(_)) => {
            Err(DecodeError::UnsupportedType {
                found: JsonKind::of(value),
            })
        }
    }
}
