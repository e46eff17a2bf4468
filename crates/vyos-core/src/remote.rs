// ── Remote config fetch contract ──
//
// The pipeline only needs "give me the subtree at this path". `ConfClient`
// is the production implementation; tests plug in canned trees.

use std::future::Future;
use std::time::Duration;

use serde_json::Value;
use vyos_api::{ConfClient, ConfigPath, FetchMetadata};

use crate::config::ConnectionConfig;
use crate::error::CoreError;

/// Untyped config subtree as returned by the router.
pub type RawConfigNode = Value;

/// A successful fetch: the subtree plus transport metadata.
#[derive(Debug, Clone)]
pub struct Fetched {
    pub node: RawConfigNode,
    pub meta: FetchMetadata,
}

/// Single-attempt read of one config path.
///
/// Implementations must be shareable across concurrent lookups and must
/// not retry. A cancelled or timed-out fetch resolves to an error.
pub trait RemoteConfigClient: Send + Sync {
    fn fetch(
        &self,
        path: &ConfigPath,
    ) -> impl Future<Output = Result<Fetched, vyos_api::Error>> + Send;
}

impl RemoteConfigClient for ConfClient {
    async fn fetch(&self, path: &ConfigPath) -> Result<Fetched, vyos_api::Error> {
        let (node, meta) = self.show_config(path).await?;
        Ok(Fetched { node, meta })
    }
}

/// Build the session's HTTP client from resolved connection settings.
pub fn connect(config: &ConnectionConfig, timeout: Duration) -> Result<ConfClient, CoreError> {
    ConfClient::new(
        config.host(),
        config.token().clone(),
        &config.transport(timeout),
    )
    .map_err(|source| CoreError::Connect {
        host: config.host().to_owned(),
        source,
    })
}
