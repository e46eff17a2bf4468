//! Config subcommand handlers. None of these talk to a router.

use serde::Serialize;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Session};
use crate::error::CliError;
use crate::output;

/// The resolved connection as shown to the user. The key never leaves
/// this process unmasked.
#[derive(Debug, Serialize)]
struct ConnectionView {
    profile: Option<String>,
    host: String,
    host_source: String,
    key: &'static str,
    key_source: String,
    insecure: bool,
    insecure_source: String,
    timeout_secs: u64,
}

impl From<&Session> for ConnectionView {
    fn from(s: &Session) -> Self {
        let r = &s.resolution;
        Self {
            profile: s.profile.clone(),
            host: r.config.host().to_owned(),
            host_source: r.host_from.to_string(),
            key: "****",
            key_source: r.key_from.to_string(),
            insecure: r.config.insecure(),
            insecure_source: r.insecure_from.to_string(),
            timeout_secs: s.timeout.as_secs(),
        }
    }
}

fn detail(v: &ConnectionView) -> String {
    [
        format!("Profile:  {}", v.profile.as_deref().unwrap_or("-")),
        format!("Host:     {} ({})", v.host, v.host_source),
        format!("Key:      {} ({})", v.key, v.key_source),
        format!("Insecure: {} ({})", v.insecure, v.insecure_source),
        format!("Timeout:  {}s", v.timeout_secs),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let view = ConnectionView::from(&config::session(global)?);
            let out = output::render_single(global.output, &view, detail, |v| v.host.clone())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path(global).display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Profiles => {
            let cfg = config::load(global)?;
            let names = cfg.profile_names();
            let default = cfg.default_profile.as_deref();
            let out = names
                .iter()
                .map(|name| {
                    if Some(name.as_str()) == default {
                        format!("{name} (default)")
                    } else {
                        name.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join("\n");
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
