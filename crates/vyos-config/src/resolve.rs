// ── Connection setting resolution ──
//
// Precedence per field, highest first: explicit configuration, environment,
// built-in default. The environment is passed in as a plain map so the
// resolver stays a pure function of its inputs.

use std::collections::HashMap;
use std::hash::BuildHasher;

use secrecy::SecretString;

use vyos_core::{ConnectionConfig, ConnectionField};

use crate::error::{ConfigError, FieldIssue};

pub const HOST_ENV: &str = "VYOS_HOST";
pub const KEY_ENV: &str = "VYOS_KEY";
pub const INSECURE_ENV: &str = "VYOS_INSECURE";

/// `insecure` when neither the explicit config nor the environment sets it.
pub const DEFAULT_INSECURE: bool = false;

/// Environment variable consulted for a field.
pub fn env_var(field: ConnectionField) -> &'static str {
    match field {
        ConnectionField::Host => HOST_ENV,
        ConnectionField::Key => KEY_ENV,
        ConnectionField::Insecure => INSECURE_ENV,
    }
}

/// One explicitly configured value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setting<T> {
    /// Not given; lower tiers decide.
    Unset,
    /// Given, but its value will only be known later. Never falls through.
    Deferred,
    Known(T),
}

impl<T> Default for Setting<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> From<Option<T>> for Setting<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Self::Known)
    }
}

impl<T> Setting<T> {
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred)
    }

    pub fn known(&self) -> Option<&T> {
        match self {
            Self::Known(value) => Some(value),
            Self::Unset | Self::Deferred => None,
        }
    }

    /// `self`, unless it is `Unset`, in which case `lower`.
    pub fn or(self, lower: Self) -> Self {
        match self {
            Self::Unset => lower,
            set => set,
        }
    }
}

/// The explicit tier: values the caller configured directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplicitConfig {
    pub host: Setting<String>,
    pub token: Setting<String>,
    pub insecure: Setting<bool>,
}

impl ExplicitConfig {
    /// Field-wise layering: every set field of `self` wins over `lower`.
    pub fn layered_over(self, lower: Self) -> Self {
        Self {
            host: self.host.or(lower.host),
            token: self.token.or(lower.token),
            insecure: self.insecure.or(lower.insecure),
        }
    }

    fn deferred_fields(&self) -> Vec<ConnectionField> {
        [
            (ConnectionField::Host, self.host.is_deferred()),
            (ConnectionField::Key, self.token.is_deferred()),
            (ConnectionField::Insecure, self.insecure.is_deferred()),
        ]
        .into_iter()
        .filter_map(|(field, deferred)| deferred.then_some(field))
        .collect()
    }
}

/// Which tier supplied a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Tier {
    Explicit,
    Environment,
    Default,
}

/// A resolved connection plus where each value came from.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub config: ConnectionConfig,
    pub host_from: Tier,
    pub key_from: Tier,
    pub insecure_from: Tier,
}

/// First tier that has a value, in the order given.
fn pick<T, const N: usize>(tiers: [(Tier, Option<T>); N]) -> Option<(Tier, T)> {
    tiers
        .into_iter()
        .find_map(|(tier, value)| value.map(|value| (tier, value)))
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

/// Lenient boolean parse: the usual spellings, anything else is `false`.
pub fn parse_bool_lenient(raw: &str) -> bool {
    matches!(raw, "1" | "t" | "T" | "TRUE" | "true" | "True")
}

/// Merge explicit settings and the environment into a validated connection.
pub fn resolve<S: BuildHasher>(
    explicit: &ExplicitConfig,
    env: &HashMap<String, String, S>,
) -> Result<ConnectionConfig, ConfigError> {
    resolve_with_sources(explicit, env).map(|resolution| resolution.config)
}

/// Like [`resolve`], also reporting the tier behind each value.
pub fn resolve_with_sources<S: BuildHasher>(
    explicit: &ExplicitConfig,
    env: &HashMap<String, String, S>,
) -> Result<Resolution, ConfigError> {
    let deferred = explicit.deferred_fields();
    if !deferred.is_empty() {
        return Err(ConfigError::Unresolved {
            issues: deferred.into_iter().map(FieldIssue::deferred).collect(),
        });
    }

    let host = pick([
        (Tier::Explicit, non_empty(explicit.host.known())),
        (Tier::Environment, non_empty(env.get(HOST_ENV))),
    ]);
    let key = pick([
        (Tier::Explicit, non_empty(explicit.token.known())),
        (Tier::Environment, non_empty(env.get(KEY_ENV))),
    ]);
    let (insecure_from, insecure) = pick([
        (Tier::Explicit, explicit.insecure.known().copied()),
        (
            Tier::Environment,
            env.get(INSECURE_ENV).map(|raw| parse_bool_lenient(raw)),
        ),
        (Tier::Default, Some(DEFAULT_INSECURE)),
    ])
    .unwrap_or((Tier::Default, DEFAULT_INSECURE));

    let (host_from, host) = host.unwrap_or((Tier::Default, String::new()));
    let (key_from, key) = key.unwrap_or((Tier::Default, String::new()));

    let config = ConnectionConfig::new(host, SecretString::from(key), insecure).map_err(
        |missing| ConfigError::Unresolved {
            issues: missing.into_iter().map(FieldIssue::missing).collect(),
        },
    )?;

    Ok(Resolution {
        config,
        host_from,
        key_from,
        insecure_from,
    })
}
