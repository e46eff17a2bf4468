//! Shared configuration for VyOS lookup tools.
//!
//! TOML profiles, connection setting resolution (explicit > environment >
//! default), and translation to `vyos_core::ConnectionConfig`. The CLI layers
//! its flags on top of the selected profile before resolving.

pub mod error;
pub mod resolve;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

pub use error::{ConfigError, FieldIssue, IssueKind};
pub use resolve::{
    DEFAULT_INSECURE, ExplicitConfig, HOST_ENV, INSECURE_ENV, KEY_ENV, Resolution, Setting, Tier,
    env_var, parse_bool_lenient, resolve, resolve_with_sources,
};

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when none is requested.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named router profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

/// A named router profile. Every field is optional; unset fields fall back
/// to the environment.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Router address or base URL (e.g., "https://192.0.2.1").
    pub host: Option<String>,

    /// API key (plaintext; prefer the VYOS_KEY env var).
    #[serde(alias = "token")]
    pub key: Option<String>,

    /// Accept self-signed certificates.
    pub insecure: Option<bool>,

    /// Override the default timeout.
    pub timeout: Option<u64>,
}

impl Profile {
    /// This profile as the explicit tier of connection resolution.
    pub fn explicit(&self) -> ExplicitConfig {
        ExplicitConfig {
            host: self.host.clone().into(),
            token: self.key.clone().into(),
            insecure: self.insecure.into(),
        }
    }
}

impl Config {
    /// Pick the active profile: the requested one, else `default_profile`,
    /// else a profile literally named "default". `None` when nothing is
    /// configured at all.
    pub fn select_profile(
        &self,
        requested: Option<&str>,
    ) -> Result<Option<(&str, &Profile)>, ConfigError> {
        let wanted = requested.or(self.default_profile.as_deref());

        match wanted {
            Some(name) => self
                .profiles
                .get_key_value(name)
                .map(|(name, profile)| Some((name.as_str(), profile)))
                .ok_or_else(|| ConfigError::ProfileNotFound {
                    name: name.to_owned(),
                    available: self.profile_names(),
                }),
            None => Ok(self
                .profiles
                .get_key_value("default")
                .map(|(name, profile)| (name.as_str(), profile))),
        }
    }

    /// Profile names, sorted.
    pub fn profile_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.profiles.keys().cloned().collect();
        names.sort();
        names
    }

    /// Effective timeout: profile override, else the global default.
    pub fn timeout_for(&self, profile: Option<&Profile>) -> Duration {
        let secs = profile
            .and_then(|p| p.timeout)
            .unwrap_or(self.defaults.timeout);
        Duration::from_secs(secs)
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("org", "vyos", "vyos").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("vyos");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the config file at `path`. A missing file yields the defaults.
///
/// Environment variables are not merged here: they form their
/// own tier in [`resolve`].
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let config = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .extract()?;
    Ok(config)
}
