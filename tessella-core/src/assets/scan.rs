use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::{config::SourceFormat, foundation::error::StitchResult};

/// Enumerate files directly under `dir` whose extension matches `format`.
///
/// Extension matching is case-insensitive (`tile.PNG` counts as `.png`).
/// Subdirectories are not recursed into. The result is sorted by file name
/// (ties by full path), so enumeration never depends on OS directory order.
pub fn scan_dir(dir: &Path, format: SourceFormat) -> StitchResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("read source directory '{}'", dir.display()))?;

    let wanted = format.extension();
    let mut out = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read entry in '{}'", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        if ext.eq_ignore_ascii_case(wanted) {
            out.push(path);
        }
    }

    out.sort_by(|a, b| a.file_name().cmp(&b.file_name()).then_with(|| a.cmp(b)));
    debug!(dir = %dir.display(), count = out.len(), "scanned source directory");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/scan.rs"]
mod tests;
