// ── Runtime connection configuration ──
//
// Describes *how* to reach one router: where, with which API key, and under
// which TLS policy. Built once per session by the resolver in vyos-config
// and then shared read-only; core never reads config files or env vars.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use vyos_api::{TlsMode, TransportConfig};

/// Identifies one connection setting in diagnostics.
///
/// Displayed with the name a user writes in a profile or flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ConnectionField {
    Host,
    Key,
    Insecure,
}

/// Validated settings for connecting to a single router.
///
/// `host` and `token` are never empty. Cheap to clone, and safe to read from
/// any number of concurrent lookups.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    host: String,
    token: SecretString,
    insecure: bool,
}

impl ConnectionConfig {
    /// Build a config, reporting every required field that is empty.
    pub fn new(
        host: impl Into<String>,
        token: SecretString,
        insecure: bool,
    ) -> Result<Self, Vec<ConnectionField>> {
        let host = host.into();
        let mut missing = Vec::new();
        if host.is_empty() {
            missing.push(ConnectionField::Host);
        }
        if token.expose_secret().is_empty() {
            missing.push(ConnectionField::Key);
        }
        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(Self {
            host,
            token,
            insecure,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn token(&self) -> &SecretString {
        &self.token
    }

    /// Skip TLS certificate verification.
    pub fn insecure(&self) -> bool {
        self.insecure
    }

    pub fn tls_mode(&self) -> TlsMode {
        TlsMode::from_insecure(self.insecure)
    }

    /// Transport settings for this connection with the given request timeout.
    pub fn transport(&self, timeout: Duration) -> TransportConfig {
        TransportConfig::new(self.tls_mode(), timeout)
    }
}
