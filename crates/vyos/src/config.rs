//! CLI-side configuration: turns global flags plus the selected profile into
//! the explicit tier handed to `vyos_config::resolve`.

use std::collections::HashMap;
use std::hash::BuildHasher;
use std::path::PathBuf;
use std::time::Duration;

use vyos_config::{Config, ExplicitConfig, Resolution, Setting};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Everything a command needs to talk to one router.
#[derive(Debug)]
pub struct Session {
    pub profile: Option<String>,
    pub resolution: Resolution,
    pub timeout: Duration,
}

/// Config file location: `--config`, else the platform default.
pub fn config_path(global: &GlobalOpts) -> PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(vyos_config::config_path)
}

pub fn load(global: &GlobalOpts) -> Result<Config, CliError> {
    Ok(vyos_config::load_config_from(&config_path(global))?)
}

/// Flags as an explicit tier. `--insecure` is a switch, so only its presence
/// counts as a setting.
fn flags_tier(global: &GlobalOpts) -> ExplicitConfig {
    ExplicitConfig {
        host: global.host.clone().into(),
        token: global.key.clone().into(),
        insecure: if global.insecure {
            Setting::Known(true)
        } else {
            Setting::Unset
        },
    }
}

/// Resolve the session from flags, profile and the process environment.
pub fn session(global: &GlobalOpts) -> Result<Session, CliError> {
    let cfg = load(global)?;
    let env: HashMap<String, String> = std::env::vars().collect();
    session_from(global, &cfg, &env)
}

pub fn session_from<S: BuildHasher>(
    global: &GlobalOpts,
    cfg: &Config,
    env: &HashMap<String, String, S>,
) -> Result<Session, CliError> {
    let selected = cfg.select_profile(global.profile.as_deref())?;
    let profile_tier = selected.map(|(_, p)| p.explicit()).unwrap_or_default();
    let explicit = flags_tier(global).layered_over(profile_tier);

    let resolution = vyos_config::resolve_with_sources(&explicit, env)?;
    let timeout = global.timeout.map_or_else(
        || cfg.timeout_for(selected.map(|(_, p)| p)),
        Duration::from_secs,
    );

    tracing::debug!(
        profile = selected.map(|(name, _)| name),
        host = resolution.config.host(),
        host_from = %resolution.host_from,
        key_from = %resolution.key_from,
        insecure_from = %resolution.insecure_from,
        "resolved connection settings"
    );

    Ok(Session {
        profile: selected.map(|(name, _)| name.to_owned()),
        resolution,
        timeout,
    })
}
