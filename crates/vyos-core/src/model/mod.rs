// ── Domain model ──

pub mod interface;

pub use interface::{NormalizedInterfaceConfig, OutputRecord};
