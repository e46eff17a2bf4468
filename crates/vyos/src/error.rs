//! CLI error types with miette diagnostics.
//!
//! Maps `ConfigError` and `CoreError` into user-facing errors that name the
//! failing stage and carry actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use vyos_config::ConfigError;
use vyos_core::{CoreError, Stage};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const CONFIG: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const DATA: i32 = 9;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Resolution ───────────────────────────────────────────────────
    #[error("[{stage}] {message}")]
    #[diagnostic(
        code(vyos::resolution),
        help(
            "Pass --host / --key, set them in a profile, or export\n\
             VYOS_HOST / VYOS_KEY. Run: vyos config show"
        )
    )]
    Unresolved { stage: Stage, message: String },

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(vyos::profile_not_found),
        help("Available profiles: {available}\nConfig file: vyos config path")
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Cannot read configuration file")]
    #[diagnostic(code(vyos::config))]
    Config(#[source] Box<figment::Error>),

    // ── Request ──────────────────────────────────────────────────────
    #[error("[{stage}] invalid lookup key {key:?}")]
    #[diagnostic(
        code(vyos::invalid_request),
        help("Interface names are single words such as eth0.")
    )]
    InvalidRequest {
        stage: Stage,
        key: String,
        #[source]
        source: vyos_api::Error,
    },

    // ── Fetch ────────────────────────────────────────────────────────
    #[error("[fetch] authentication failed for {target}")]
    #[diagnostic(
        code(vyos::auth_failed),
        help("Verify the API key configured under `service https api keys` on the router.")
    )]
    AuthFailed {
        target: String,
        #[source]
        source: vyos_api::Error,
    },

    #[error("[fetch] could not connect while reading {target}")]
    #[diagnostic(
        code(vyos::connection_failed),
        help(
            "Check that the router is reachable and the HTTP API is enabled.\n\
             Self-signed certificate? Try --insecure (-k)."
        )
    )]
    ConnectionFailed {
        target: String,
        #[source]
        source: vyos_api::Error,
    },

    #[error("[fetch] request for {target} timed out")]
    #[diagnostic(
        code(vyos::timeout),
        help("Increase the timeout with --timeout or check router responsiveness.")
    )]
    Timeout {
        target: String,
        #[source]
        source: vyos_api::Error,
    },

    #[error("[fetch] router rejected {target}")]
    #[diagnostic(code(vyos::api_error))]
    Fetch {
        target: String,
        #[source]
        source: vyos_api::Error,
    },

    // ── Decode / Normalize ───────────────────────────────────────────
    #[error("[{stage}] unexpected configuration shape for {target}")]
    #[diagnostic(
        code(vyos::unexpected_shape),
        help("Inspect the raw subtree with -vv to see the router's response.")
    )]
    Data {
        stage: Stage,
        target: String,
        #[source]
        source: vyos_core::NormalizationError,
    },

    // ── Aggregate ────────────────────────────────────────────────────
    #[error("{failed} of {total} lookups failed")]
    #[diagnostic(code(vyos::partial_failure))]
    Partial {
        failed: usize,
        total: usize,
        #[related]
        errors: Vec<CliError>,
    },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error("Cannot render JSON output: {0}")]
    #[diagnostic(code(vyos::json))]
    Json(#[from] serde_json::Error),

    #[error("Cannot render YAML output: {0}")]
    #[diagnostic(code(vyos::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Unresolved { .. } | Self::ProfileNotFound { .. } | Self::Config(_) => {
                exit_code::CONFIG
            }
            Self::InvalidRequest { .. } => exit_code::USAGE,
            Self::AuthFailed { .. } => exit_code::AUTH,
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Data { .. } => exit_code::DATA,
            // A single distinct cause keeps its own code.
            Self::Partial { errors, .. } => {
                let mut codes = errors.iter().map(Self::exit_code);
                match codes.next() {
                    Some(first) if codes.all(|code| code == first) => first,
                    _ => exit_code::GENERAL,
                }
            }
            Self::Fetch { .. } | Self::Json(_) | Self::Yaml(_) => {
                exit_code::GENERAL
            }
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Unresolved { .. } => CliError::Unresolved {
                stage: Stage::Resolution,
                message: err.to_string(),
            },
            ConfigError::ProfileNotFound { name, available } => CliError::ProfileNotFound {
                name,
                available: if available.is_empty() {
                    "(none)".into()
                } else {
                    available.join(", ")
                },
            },
            ConfigError::Figment(err) => CliError::Config(err),
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        let stage = err.stage();
        match err {
            CoreError::InvalidRequest { key, source } => CliError::InvalidRequest {
                stage,
                key,
                source,
            },
            CoreError::Connect { host, source } => CliError::ConnectionFailed {
                target: host,
                source,
            },
            CoreError::Transport { path, source } => {
                let target = format!("'{path}'");
                if source.is_auth_failure() {
                    CliError::AuthFailed { target, source }
                } else if source.is_timeout() {
                    CliError::Timeout { target, source }
                } else if source.is_connect() || matches!(source, vyos_api::Error::Tls(_)) {
                    CliError::ConnectionFailed { target, source }
                } else {
                    CliError::Fetch { target, source }
                }
            }
            CoreError::Normalization { path, source } => CliError::Data {
                stage,
                target: format!("'{path}'"),
                source,
            },
        }
    }
}
