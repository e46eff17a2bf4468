// ── Core error types ──
//
// Each variant belongs to exactly one pipeline stage. Transport errors are
// passed through untouched with the attempted path attached; nothing here
// downgrades a failure into a default value.

use thiserror::Error;
use vyos_api::ConfigPath;

use crate::normalize::NormalizationError;

/// Pipeline stage a failure originated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Stage {
    /// Merging explicit, environment and default connection settings.
    Resolution,
    /// Turning the caller's lookup key into a config path.
    Request,
    /// Talking to the router.
    Fetch,
    /// A leaf had a JSON shape the decoder does not accept.
    Decode,
    /// The fetched subtree could not be turned into the domain record.
    Normalize,
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid lookup key {key:?}")]
    InvalidRequest {
        key: String,
        #[source]
        source: vyos_api::Error,
    },

    #[error("Cannot set up a client for {host}")]
    Connect {
        host: String,
        #[source]
        source: vyos_api::Error,
    },

    #[error("Failed to fetch '{path}'")]
    Transport {
        path: ConfigPath,
        #[source]
        source: vyos_api::Error,
    },

    #[error("Failed to normalize '{path}'")]
    Normalization {
        path: ConfigPath,
        #[source]
        source: NormalizationError,
    },
}

impl CoreError {
    pub fn stage(&self) -> Stage {
        match self {
            Self::InvalidRequest { .. } => Stage::Request,
            Self::Connect { .. } | Self::Transport { .. } => Stage::Fetch,
            Self::Normalization { source, .. } => {
                if source.decode_kind().is_some() {
                    Stage::Decode
                } else {
                    Stage::Normalize
                }
            }
        }
    }

    /// The config path the failing request targeted, if one was built.
    pub fn path(&self) -> Option<&ConfigPath> {
        match self {
            Self::Transport { path, .. } | Self::Normalization { path, .. } => Some(path),
            Self::InvalidRequest { .. } | Self::Connect { .. } => None,
        }
    }

    /// The transport-layer error, if this failure came from the client.
    pub fn api_error(&self) -> Option<&vyos_api::Error> {
        match self {
            Self::InvalidRequest { source, .. }
            | Self::Connect { source, .. }
            | Self::Transport { source, .. } => Some(source),
            Self::Normalization { .. } => None,
        }
    }
}
