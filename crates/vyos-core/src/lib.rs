//! Pipeline between `vyos-api` and callers (CLI, embedding hosts).
//!
//! - **[`ConnectionConfig`]**: validated host / API key / TLS policy for one
//!   router session. Built by `vyos-config`; core never reads files or the
//!   process environment.
//! - **[`RemoteConfigClient`]**: single-attempt fetch of a config path;
//!   implemented for [`vyos_api::ConfClient`].
//! - **[`decode_string_list`]**: folds the router's "string or array of
//!   strings" leaves into one ordered list.
//! - **[`normalize`]** / **[`map_output`]**: raw subtree to
//!   [`NormalizedInterfaceConfig`] to caller-facing [`OutputRecord`].
//! - **[`EthernetInterfaceLookup`]**: the composed pipeline, with every
//!   failure reported as a [`CoreError`] tagged with its [`Stage`].

pub mod config;
pub mod decode;
pub mod error;
pub mod lookup;
pub mod model;
pub mod normalize;
pub mod output;
pub mod remote;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ConnectionConfig, ConnectionField};
pub use decode::{DecodeError, DecodeErrorKind, JsonKind, decode_string_list};
pub use error::{CoreError, Stage};
pub use lookup::EthernetInterfaceLookup;
pub use model::{NormalizedInterfaceConfig, OutputRecord};
pub use normalize::{NormalizationError, normalize};
pub use output::map_output;
pub use remote::{Fetched, RawConfigNode, RemoteConfigClient, connect};

pub use vyos_api::{ConfClient, ConfigPath};
