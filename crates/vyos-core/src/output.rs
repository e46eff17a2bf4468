// ── Caller-facing record assembly ──
//
// The only place the internal model meets the output shape. New output
// fields are added here without touching decode or normalize.

use crate::model::{NormalizedInterfaceConfig, OutputRecord};

pub fn map_output(requested_name: &str, normalized: NormalizedInterfaceConfig) -> OutputRecord {
    let NormalizedInterfaceConfig { addresses, hw_id } = normalized;
    OutputRecord {
        requested_name: requested_name.to_owned(),
        addresses,
        hw_id,
    }
}
