//! Repository adapters: discover compilation units on disk and read unit lists supplied by a host.
//!
//! This crate is allowed to do filesystem IO. It never evaluates policy; it only turns a
//! repository (or a host-provided listing) into `UnitInput`s for the domain engine.

#![forbid(unsafe_code)]

mod discover;

use anyhow::Context;
use prolayout_domain::UnitInput;
use serde::Deserialize;

pub use discover::{discover_units, unit_path};

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
pub mod fuzz {
    /// Parse arbitrary text as a unit listing. **Never panics** on any input.
    pub fn parse_units(text: &str) -> anyhow::Result<usize> {
        Ok(super::load_units_json(text)?.len())
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct UnitRecord {
    path: String,
    #[serde(default)]
    files: Vec<String>,
}

/// Read a host-provided unit listing: a JSON array of `{"path": "...", "files": [...]}`.
///
/// Units keep the order they were listed in. `files` may be omitted.
pub fn load_units_json(text: &str) -> anyhow::Result<Vec<UnitInput>> {
    let records: Vec<UnitRecord> = serde_json::from_str(text).context("parse unit listing")?;
    let units: Vec<UnitInput> = records
        .into_iter()
        .map(|r| UnitInput {
            path: r.path,
            files: r.files,
        })
        .collect();
    tracing::debug!(units = units.len(), "loaded unit listing");
    Ok(units)
}
