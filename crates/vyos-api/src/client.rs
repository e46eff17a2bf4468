// VyOS configuration API client
//
// Wraps `reqwest::Client` with base URL normalization, form encoding of the
// `/retrieve` call, and `{ success, data, error }` envelope unwrapping.

use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{ApiResponse, ConfigPath, FetchMetadata};
use crate::transport::TransportConfig;

/// Read-only HTTP client for a single router's configuration tree.
///
/// One instance is built per session and shared by reference; it holds no
/// per-request state.
pub struct ConfClient {
    http: reqwest::Client,
    base_url: Url,
    key: SecretString,
}

impl ConfClient {
    /// Build a client for `host` authenticating with `key`.
    ///
    /// `host` may be a bare address (`192.0.2.1`, `router.lan:8443`) or a
    /// full URL; bare addresses get an `https://` scheme.
    pub fn new(host: &str, key: SecretString, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::with_client(http, host, key)
    }

    /// Wrap an existing `reqwest::Client` (tests, custom TLS setups).
    pub fn with_client(http: reqwest::Client, host: &str, key: SecretString) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(host)?;
        Ok(Self {
            http,
            base_url,
            key,
        })
    }

    /// The router base URL, always ending in `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn normalize_base_url(host: &str) -> Result<Url, Error> {
        let host = host.trim();
        let raw = if host.contains("://") {
            host.to_owned()
        } else {
            format!("https://{host}")
        };

        let mut url = Url::parse(&raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    /// Fetch the configuration subtree at `path`.
    ///
    /// `POST /retrieve` with form fields `data={"op":"showConfig","path":[..]}`
    /// and `key`. Returns the unwrapped `data` payload. Single attempt.
    pub async fn show_config(&self, path: &ConfigPath) -> Result<(Value, FetchMetadata), Error> {
        let url = self.base_url.join("retrieve")?;
        let data = json!({ "op": "showConfig", "path": path }).to_string();
        debug!(%url, path = %path, "POST showConfig");

        let resp = self
            .http
            .post(url)
            .form(&[("data", data.as_str()), ("key", self.key.expose_secret())])
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        debug!(status = status.as_u16(), body = %body, "got http response");

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(Error::Authentication {
                message: if body.is_empty() {
                    status.to_string()
                } else {
                    body
                },
            });
        }

        if !status.is_success() {
            // Path errors come back as 4xx with a regular envelope.
            return Err(match serde_json::from_str::<ApiResponse>(&body) {
                Ok(ApiResponse {
                    error: Some(message),
                    ..
                }) => Error::Api { message },
                _ => Error::Status {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        let envelope: ApiResponse = serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.clone(),
            }
        })?;

        if !envelope.success {
            return Err(Error::Api {
                message: envelope
                    .error
                    .unwrap_or_else(|| "request reported failure without a message".into()),
            });
        }

        Ok((
            envelope.data,
            FetchMetadata {
                status: status.as_u16(),
            },
        ))
    }
}

impl std::fmt::Debug for ConfClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}
