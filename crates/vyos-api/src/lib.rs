// vyos-api: Async Rust client for the VyOS HTTP configuration API

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::ConfClient;
pub use error::Error;
pub use models::{ConfigPath, FetchMetadata};
pub use transport::{TlsMode, TransportConfig};
