//! Dataset output.
//!
//! The whole result set is serialized once, after the corpus is exhausted,
//! as a pretty-printed JSON array of records.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::data::OutputRecord;

/// Write `records` to `path` as a JSON array.
///
/// Parent directories are created as needed. Uses 2-space indentation and adds
/// a trailing newline. An empty set is written as `[]`.
pub fn write_records(path: &Path, records: &[OutputRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(records).context("Failed to serialize records")?;

    fs::write(path, format!("{}\n", content))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
