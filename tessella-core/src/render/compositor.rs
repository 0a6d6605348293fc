use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::debug;

use crate::{
    foundation::core::Rgba8,
    foundation::error::{StitchError, StitchResult},
    layout::planner::LayoutPlan,
};

/// Paint every placement onto a background canvas and persist it as a PNG.
///
/// The canvas is owned exclusively by this call for the duration of the
/// render; placements are painted strictly in plan order, so later placements
/// paint over earlier ones where they overlap. Painting clips at the canvas
/// edges.
///
/// The output is written to a sibling temporary file and renamed into place,
/// overwriting an existing file at `out_path`. On any failure the temporary
/// file is removed and `out_path` is left untouched; every failure in this
/// phase is a [`StitchError::Render`].
#[tracing::instrument(skip(plan, background), fields(placements = plan.placements.len()))]
pub fn compose(plan: &LayoutPlan, background: Rgba8, out_path: &Path) -> StitchResult<()> {
    let byte_len = plan.canvas.area().checked_mul(4);
    if byte_len.is_none_or(|len| usize::try_from(len).is_err()) {
        return Err(StitchError::render(format!(
            "cannot allocate a {}x{} canvas",
            plan.canvas.width, plan.canvas.height
        )));
    }

    let mut canvas = RgbaImage::from_pixel(
        plan.canvas.width,
        plan.canvas.height,
        image::Rgba([background.r, background.g, background.b, background.a]),
    );

    for placement in &plan.placements {
        let img = image::open(&placement.record.path).map_err(|e| {
            StitchError::render(format!(
                "composite '{}': {e}",
                placement.record.path.display()
            ))
        })?;
        image::imageops::overlay(
            &mut canvas,
            &img,
            i64::from(placement.left),
            i64::from(placement.top),
        );
    }

    if let Some(parent) = out_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            StitchError::render(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }

    let tmp_path = temp_path_for(out_path);
    let mut guard = TempFileGuard(Some(tmp_path.clone()));
    canvas
        .save_with_format(&tmp_path, image::ImageFormat::Png)
        .map_err(|e| StitchError::render(format!("encode atlas '{}': {e}", tmp_path.display())))?;
    std::fs::rename(&tmp_path, out_path)
        .map_err(|e| StitchError::render(format!("persist atlas '{}': {e}", out_path.display())))?;
    guard.0 = None;

    debug!(out = %out_path.display(), "atlas written");
    Ok(())
}

fn temp_path_for(out_path: &Path) -> PathBuf {
    let mut name = out_path
        .file_name()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "atlas.png".into());
    name.push(".tmp");
    out_path.with_file_name(name)
}

struct TempFileGuard(Option<PathBuf>);

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if let Some(path) = self.0.take() {
            let _ = std::fs::remove_file(path);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
