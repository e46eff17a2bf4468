// ── Interface domain types ──

use serde::Serialize;

/// Canonical view of one interface's config subtree.
///
/// `addresses` is always a list, however the router encoded it. An empty
/// `hw_id` means the router has not assigned one yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedInterfaceConfig {
    pub addresses: Vec<String>,
    pub hw_id: String,
}

/// Caller-facing result of one interface lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    /// The lookup key exactly as the caller gave it.
    #[serde(rename = "name")]
    pub requested_name: String,
    pub addresses: Vec<String>,
    pub hw_id: String,
}
