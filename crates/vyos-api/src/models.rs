// Wire types for the VyOS `/retrieve` endpoint.
//
// Every response is wrapped in `{ success, data, error }`. The `data`
// payload stays loosely typed because its shape depends on the config path
// and on how the router firmware chose to encode single vs. multi values.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// Hierarchical path into the router's configuration tree.
///
/// Text form is whitespace-delimited (`interfaces ethernet eth0`), wire form
/// is the list of segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigPath(Vec<String>);

impl ConfigPath {
    /// Split a whitespace-delimited path. An empty string is the config root.
    pub fn parse(raw: &str) -> Self {
        Self(raw.split_whitespace().map(str::to_owned).collect())
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Path of a single ethernet interface: `interfaces ethernet {name}`.
    pub fn ethernet_interface(name: &str) -> Result<Self, Error> {
        if name.is_empty() {
            return Err(Error::InvalidPath {
                reason: "interface name must not be empty".into(),
            });
        }
        if name.chars().any(char::is_whitespace) {
            return Err(Error::InvalidPath {
                reason: format!("interface name {name:?} contains whitespace"),
            });
        }
        Ok(Self::from_segments(["interfaces", "ethernet", name]))
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// The `{ success, data, error }` envelope every VyOS API call returns.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub error: Option<String>,
}

/// Transport-level facts about a successful fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchMetadata {
    /// HTTP status code of the response.
    pub status: u16,
}
