use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use crate::model::OsRecord;

/// Write the record list as a 4-space-indented JSON array, replacing any
/// previous output. The parent directory is created if needed.
pub fn write_json(path: &Path, records: &[OsRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(file, formatter);
    records
        .serialize(&mut ser)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Wrote {} records: {}", records.len(), path.display());
    Ok(())
}

// ── Tests ──
