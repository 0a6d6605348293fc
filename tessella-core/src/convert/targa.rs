use std::path::{Path, PathBuf};

use anyhow::Context;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    assets::SkippedFile,
    foundation::error::{StitchError, StitchResult},
};

/// Decode a single TARGA file and re-encode it as a PNG at `out_path`.
pub fn convert_to_png(src: &Path, out_path: &Path) -> StitchResult<()> {
    let img = image::open(src).map_err(|e| StitchError::conversion(src, e.to_string()))?;
    img.save_with_format(out_path, image::ImageFormat::Png)
        .map_err(|e| StitchError::conversion(src, format!("write '{}': {e}", out_path.display())))?;
    Ok(())
}

/// Convert every TARGA source into `scratch_dir` as a PNG intermediate.
///
/// Conversions run as an unordered fan-out with per-file failure isolation:
/// one unconvertible file is excluded and reported without aborting its
/// siblings. The scratch directory is created if absent and is never cleaned
/// by the run; disposing of intermediates is the caller's responsibility.
/// Returned intermediate paths are sorted by file name for determinism.
pub fn convert_all(
    paths: &[PathBuf],
    scratch_dir: &Path,
) -> StitchResult<(Vec<PathBuf>, Vec<SkippedFile>)> {
    std::fs::create_dir_all(scratch_dir)
        .with_context(|| format!("create scratch directory '{}'", scratch_dir.display()))?;

    let results: Vec<StitchResult<PathBuf>> = paths
        .par_iter()
        .map(|src| {
            let stem = src
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| StitchError::conversion(src, "file name is not valid UTF-8"))?;
            let out_path = scratch_dir.join(format!("{stem}.png"));
            convert_to_png(src, &out_path)?;
            Ok(out_path)
        })
        .collect();

    let mut converted = Vec::with_capacity(results.len());
    let mut skipped = Vec::new();
    for result in results {
        match result {
            Ok(out_path) => converted.push(out_path),
            Err(StitchError::Conversion { path, reason }) => {
                warn!(path = %path.display(), reason = %reason, "excluding unconvertible file");
                skipped.push(SkippedFile { path, reason });
            }
            Err(other) => return Err(other),
        }
    }

    converted.sort_by(|a, b| a.file_name().cmp(&b.file_name()).then_with(|| a.cmp(b)));
    debug!(
        converted = converted.len(),
        skipped = skipped.len(),
        "targa conversion pass complete"
    );
    Ok((converted, skipped))
}

#[cfg(test)]
#[path = "../../tests/unit/convert/targa.rs"]
mod tests;
