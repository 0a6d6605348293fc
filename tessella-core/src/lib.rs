//! Tessella stitches a directory of raster tiles into a single atlas image.
//!
//! The engine turns a scanned directory into one composite PNG:
//!
//! 1. **Scan**: enumerate source files by extension (`.png` or `.tga`)
//! 2. **Convert** (TARGA pipeline only): re-encode sources as PNG intermediates
//!    into a caller-owned scratch directory
//! 3. **Probe**: decode each file and record its pixel dimensions
//! 4. **Plan**: compute the canvas size and a placement for every image
//!    under a fixed-grid or packed-grid strategy
//! 5. **Compose**: paint placements onto a background canvas and persist it
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: planning is pure; per-file fan-out stages are
//!   re-sorted by file name before layout, so completion order never leaks into
//!   the output.
//! - **No partial output**: the atlas is written via temp-file-then-rename, or
//!   not at all.
//! - **Isolated per-file failures**: one undecodable source never aborts its
//!   siblings; fatal errors are reserved for empty input sets and the render
//!   phase.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod config;
mod convert;
mod foundation;
mod layout;
mod pipeline;
mod render;

pub use assets::probe::probe_all;
pub use assets::scan::scan_dir;
pub use assets::{ImageRecord, SkippedFile};
pub use config::{DecodePolicy, LayoutStrategy, PipelineConfig, SourceFormat};
pub use convert::targa::{convert_all, convert_to_png};
pub use foundation::core::{Extent, Rgba8};
pub use foundation::error::{StitchError, StitchResult};
pub use layout::planner::{LayoutPlan, Placement, plan_layout};
pub use pipeline::{RunSummary, run};
pub use render::compositor::compose;
