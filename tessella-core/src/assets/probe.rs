use std::path::{Path, PathBuf};

use image::GenericImageView;
use rayon::prelude::*;
use tracing::warn;

use crate::{
    assets::{ImageRecord, SkippedFile},
    config::DecodePolicy,
    foundation::error::{StitchError, StitchResult},
};

/// Decode every file and return one [`ImageRecord`] per decodable file.
///
/// Files are probed as an unordered fan-out; afterwards records are re-sorted
/// by `(name, path)` so downstream layout is deterministic regardless of
/// completion order. Probing performs a full decode, so corrupt files are
/// caught here rather than poisoning the render phase.
///
/// Per-file decode failures follow `policy`: under [`DecodePolicy::Skip`] the
/// file is excluded and reported in the skipped list; under
/// [`DecodePolicy::Fail`] the first failure aborts. An empty surviving set is
/// a [`StitchError::NoInput`].
pub fn probe_all(
    paths: &[PathBuf],
    policy: DecodePolicy,
) -> StitchResult<(Vec<ImageRecord>, Vec<SkippedFile>)> {
    let results: Vec<StitchResult<ImageRecord>> =
        paths.par_iter().map(|path| probe_file(path)).collect();

    let mut records = Vec::with_capacity(results.len());
    let mut skipped = Vec::new();
    for result in results {
        match result {
            Ok(record) => records.push(record),
            Err(StitchError::Decode { path, reason }) => {
                if policy == DecodePolicy::Fail {
                    return Err(StitchError::Decode { path, reason });
                }
                warn!(path = %path.display(), reason = %reason, "excluding undecodable file");
                skipped.push(SkippedFile { path, reason });
            }
            Err(other) => return Err(other),
        }
    }

    if records.is_empty() {
        return Err(StitchError::no_input(format!(
            "none of the {} candidate files could be decoded",
            paths.len()
        )));
    }

    records.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));
    Ok((records, skipped))
}

fn probe_file(path: &Path) -> StitchResult<ImageRecord> {
    let img = image::open(path).map_err(|e| StitchError::decode(path, e.to_string()))?;
    let (width, height) = img.dimensions();
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .map(str::to_owned)
        .ok_or_else(|| StitchError::decode(path, "file name is not valid UTF-8"))?;

    Ok(ImageRecord {
        path: path.to_path_buf(),
        name,
        width,
        height,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/probe.rs"]
mod tests;
