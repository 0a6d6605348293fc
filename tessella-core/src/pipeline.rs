use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use crate::{
    assets::{ImageRecord, SkippedFile, probe, scan},
    config::{PipelineConfig, SourceFormat},
    convert::targa,
    foundation::core::Extent,
    foundation::error::{StitchError, StitchResult},
    layout::planner,
    render::compositor,
};

/// Counts and outcomes of one pipeline run.
#[derive(Clone, Debug, serde::Serialize)]
pub struct RunSummary {
    /// Source files matched by the scanner.
    pub scanned: usize,
    /// Files excluded by the convert or probe stages.
    pub skipped: Vec<SkippedFile>,
    /// Images placed on the canvas.
    pub placed: usize,
    /// Output canvas dimensions.
    pub canvas: Extent,
    /// Path of the written atlas.
    pub out_path: PathBuf,
}

/// Run the full stitching pipeline described by `config`.
///
/// Stages: scan → convert (TARGA only) → probe → plan → compose. Per-file
/// failures in the convert and probe stages are isolated according to
/// [`DecodePolicy`](crate::DecodePolicy); scan, plan, and compose failures
/// abort the run with no output file left behind.
#[tracing::instrument(skip(config), fields(source = %config.source_dir.display()))]
pub fn run(config: &PipelineConfig) -> StitchResult<RunSummary> {
    config.validate()?;

    let sources = scan::scan_dir(&config.source_dir, config.source_format)?;
    if sources.is_empty() {
        return Err(StitchError::no_input(format!(
            "no .{} files found in '{}'",
            config.source_format.extension(),
            config.source_dir.display()
        )));
    }
    info!(count = sources.len(), "found source files");

    let (records, skipped) = if config.threads.is_some() {
        let pool = build_thread_pool(config.threads)?;
        pool.install(|| gather_records(config, &sources))?
    } else {
        gather_records(config, &sources)?
    };
    info!(images = records.len(), skipped = skipped.len(), "probed image metadata");

    let plan = planner::plan_layout(
        &records,
        config.strategy,
        config.fixed_columns,
        config.padding_px,
    )?;
    info!(
        width = plan.canvas.width,
        height = plan.canvas.height,
        placements = plan.placements.len(),
        "layout planned"
    );

    compositor::compose(&plan, config.background, &config.out_path)?;
    info!(out = %config.out_path.display(), "atlas written");

    Ok(RunSummary {
        scanned: sources.len(),
        skipped,
        placed: plan.placements.len(),
        canvas: plan.canvas,
        out_path: config.out_path.clone(),
    })
}

/// Convert (if needed) and probe all sources, merging per-file exclusions.
fn gather_records(
    config: &PipelineConfig,
    sources: &[PathBuf],
) -> StitchResult<(Vec<ImageRecord>, Vec<SkippedFile>)> {
    let mut skipped = Vec::new();

    let candidates = match config.source_format {
        SourceFormat::Png => sources.to_vec(),
        SourceFormat::Tga => {
            let scratch = config.scratch_dir.as_deref().ok_or_else(|| {
                StitchError::validation("scratch_dir is required for the tga pipeline")
            })?;
            let (converted, failed) = targa::convert_all(sources, scratch)?;
            info!(
                converted = converted.len(),
                total = sources.len(),
                "converted targa sources"
            );
            skipped.extend(failed);
            if converted.is_empty() {
                return Err(StitchError::no_input(
                    "no files were successfully converted",
                ));
            }
            converted
        }
    };

    let (records, probe_skipped) = probe::probe_all(&candidates, config.decode_policy)?;
    skipped.extend(probe_skipped);
    Ok((records, skipped))
}

fn build_thread_pool(threads: Option<usize>) -> StitchResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(StitchError::validation("threads must be >= 1 when set"));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    Ok(builder.build().context("build worker thread pool")?)
}
