//! Subcommand implementations.

pub mod canonicalize;
pub mod emit;
pub mod list;
pub mod recover;
pub mod trace;
pub mod verify;

use std::path::Path;
use trailproof::{Trailproof, TrailproofConfig};

/// Opens a journal that must already exist.
pub fn open_existing(
    journal: &str,
    signing_key: Option<String>,
) -> Result<Trailproof, Box<dyn std::error::Error>> {
    if !Path::new(journal).is_file() {
        return Err(format!("journal not found: {}", journal).into());
    }

    tracing::debug!(journal, signed = signing_key.is_some(), "opening journal");

    let mut config = TrailproofConfig::jsonl(journal);
    if let Some(key) = signing_key {
        config = config.with_signing_key(key);
    }

    Trailproof::new(config).map_err(|e| format!("Failed to open journal {}: {}", journal, e).into())
}
