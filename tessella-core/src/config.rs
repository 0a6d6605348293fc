use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{StitchError, StitchResult};

/// Source format accepted by the scanner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Scan for `.png` files and stitch them directly.
    #[default]
    Png,
    /// Scan for `.tga` files and convert them to PNG intermediates first.
    Tga,
}

impl SourceFormat {
    /// File extension matched (case-insensitively) by the scanner.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Tga => "tga",
        }
    }
}

/// Grid arrangement used by the layout planner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutStrategy {
    /// One uniform cell per image, sized from the first image in sort order.
    #[default]
    FixedGrid,
    /// Row packing with per-row height from the tallest image in the row.
    PackedGrid,
}

/// Policy applied when a single source file fails to decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Exclude the file and continue with the remaining set.
    #[default]
    Skip,
    /// Abort the run on the first decode failure.
    Fail,
}

/// Pipeline run parameters, validated once at startup.
///
/// A config is a pure data model that can be built programmatically or loaded
/// from JSON via [`PipelineConfig::from_path`]. Running it is performed by
/// [`run`](crate::run).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PipelineConfig {
    /// Directory scanned (non-recursively) for source images.
    pub source_dir: PathBuf,
    /// Output atlas path; the output is always PNG-encoded.
    pub out_path: PathBuf,
    /// Source format selecting the PNG or TARGA pipeline.
    #[serde(default)]
    pub source_format: SourceFormat,
    /// Canvas background color.
    #[serde(default)]
    pub background: Rgba8,
    /// Layout strategy.
    #[serde(default)]
    pub strategy: LayoutStrategy,
    /// Column count for the fixed grid.
    #[serde(default = "default_fixed_columns")]
    pub fixed_columns: u32,
    /// Padding in pixels between packed-grid cells.
    #[serde(default)]
    pub padding_px: u32,
    /// Scratch directory for converted intermediates (TARGA pipeline only).
    #[serde(default)]
    pub scratch_dir: Option<PathBuf>,
    /// What to do when a single file fails to decode.
    #[serde(default)]
    pub decode_policy: DecodePolicy,
    /// Worker threads for per-file stages; `None` uses the rayon default.
    #[serde(default)]
    pub threads: Option<usize>,
    /// Overwrite an existing file at `out_path`.
    #[serde(default = "default_overwrite")]
    pub overwrite: bool,
}

fn default_fixed_columns() -> u32 {
    8
}

fn default_overwrite() -> bool {
    true
}

impl PipelineConfig {
    /// Build a config with defaults for everything except the two paths.
    pub fn new(source_dir: impl Into<PathBuf>, out_path: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            out_path: out_path.into(),
            source_format: SourceFormat::default(),
            background: Rgba8::default(),
            strategy: LayoutStrategy::default(),
            fixed_columns: default_fixed_columns(),
            padding_px: 0,
            scratch_dir: None,
            decode_policy: DecodePolicy::default(),
            threads: None,
            overwrite: default_overwrite(),
        }
    }

    /// Load a config from a JSON file.
    pub fn from_path(path: &Path) -> StitchResult<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read config '{}'", path.display()))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| StitchError::validation(format!("parse config '{}': {e}", path.display())))
    }

    /// Check invariants that must hold before any stage runs.
    pub fn validate(&self) -> StitchResult<()> {
        if self.fixed_columns == 0 {
            return Err(StitchError::validation("fixed_columns must be >= 1"));
        }
        if self.threads == Some(0) {
            return Err(StitchError::validation("threads must be >= 1 when set"));
        }
        if self.source_format == SourceFormat::Tga && self.scratch_dir.is_none() {
            return Err(StitchError::validation(
                "scratch_dir is required for the tga pipeline",
            ));
        }
        if !self.overwrite && self.out_path.exists() {
            return Err(StitchError::validation(format!(
                "output '{}' already exists and overwrite is disabled",
                self.out_path.display()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
