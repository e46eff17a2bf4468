//! Ethernet interface lookups.

use tabled::Tabled;
use vyos_core::{EthernetInterfaceLookup, OutputRecord, RemoteConfigClient};

use crate::cli::{EthernetArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct InterfaceRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Addresses")]
    addresses: String,
    #[tabled(rename = "HW-ID")]
    hw_id: String,
}

impl From<&OutputRecord> for InterfaceRow {
    fn from(r: &OutputRecord) -> Self {
        Self {
            name: r.requested_name.clone(),
            addresses: if r.addresses.is_empty() {
                "-".into()
            } else {
                r.addresses.join("\n")
            },
            hw_id: if r.hw_id.is_empty() {
                "-".into()
            } else {
                r.hw_id.clone()
            },
        }
    }
}

/// `name<TAB>addr,addr<TAB>hw-id`; empty fields stay empty.
fn plain(r: &OutputRecord) -> String {
    format!("{}\t{}\t{}", r.requested_name, r.addresses.join(","), r.hw_id)
}

// ── Handler ─────────────────────────────────────────────────────────

/// Look up every requested interface, print the ones that resolved, and
/// report the rest as one error.
pub async fn handle<C: RemoteConfigClient>(
    lookup: &EthernetInterfaceLookup<C>,
    args: &EthernetArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let total = args.names.len();
    let results = lookup.read_many(&args.names).await;

    let mut records = Vec::with_capacity(total);
    let mut errors = Vec::new();
    for result in results {
        match result {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::debug!(stage = %err.stage(), error = %err, "lookup failed");
                errors.push(CliError::from(err));
            }
        }
    }

    if !records.is_empty() {
        let out = output::render_list(global.output, &records, |r| InterfaceRow::from(r), plain)?;
        output::print_output(&out, global.quiet);
    }

    match errors.len() {
        0 => Ok(()),
        1 if total == 1 => Err(errors.remove(0)),
        failed => Err(CliError::Partial {
            failed,
            total,
            errors,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(addresses: &[&str], hw_id: &str) -> OutputRecord {
        OutputRecord {
            requested_name: "eth0".into(),
            addresses: addresses.iter().map(|a| (*a).to_owned()).collect(),
            hw_id: hw_id.into(),
        }
    }

    #[test]
    fn plain_line_is_tab_separated() {
        let line = plain(&record(&["10.0.0.1/24", "10.0.0.2/24"], "aa:bb"));
        assert_eq!(line, "eth0\t10.0.0.1/24,10.0.0.2/24\taa:bb");
    }

    #[test]
    fn empty_fields_render_as_dash_in_table() {
        let row = InterfaceRow::from(&record(&[], ""));
        assert_eq!(row.addresses, "-");
        assert_eq!(row.hw_id, "-");
    }
}
