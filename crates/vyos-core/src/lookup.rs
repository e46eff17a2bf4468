// ── Ethernet interface lookup ──
//
// key -> ConfigPath -> fetch -> normalize -> OutputRecord. One client is
// shared by every lookup of a session; each request owns its own raw node
// and records, so lookups run concurrently without coordination.

use futures_util::future::join_all;
use tracing::{debug, info, trace};
use vyos_api::ConfigPath;

use crate::error::CoreError;
use crate::model::OutputRecord;
use crate::normalize::normalize;
use crate::output::map_output;
use crate::remote::RemoteConfigClient;

/// Reads `interfaces ethernet <name>` subtrees through a [`RemoteConfigClient`].
pub struct EthernetInterfaceLookup<C> {
    client: C,
}

impl<C: RemoteConfigClient> EthernetInterfaceLookup<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Fetch and normalize a single interface.
    pub async fn read(&self, name: &str) -> Result<OutputRecord, CoreError> {
        let path =
            ConfigPath::ethernet_interface(name).map_err(|source| CoreError::InvalidRequest {
                key: name.to_owned(),
                source,
            })?;

        info!(ethernet_interface = name, "fetching ethernet interface");
        let fetched = self
            .client
            .fetch(&path)
            .await
            .map_err(|source| CoreError::Transport {
                path: path.clone(),
                source,
            })?;
        debug!(
            ethernet_interface = name,
            status = fetched.meta.status,
            response = %fetched.node,
            "got config subtree"
        );

        let normalized =
            normalize(&fetched.node).map_err(|source| CoreError::Normalization { path, source })?;
        trace!(ethernet_interface = name, ?normalized, "normalized interface");

        Ok(map_output(name, normalized))
    }

    /// Run [`read`](Self::read) for every name concurrently.
    ///
    /// Results come back in input order; one failure does not affect the
    /// other lookups.
    pub async fn read_many<I, S>(&self, names: I) -> Vec<Result<OutputRecord, CoreError>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        join_all(
            names
                .into_iter()
                .map(|name| async move { self.read(name.as_ref()).await }),
        )
        .await
    }
}
