use crate::{
    assets::ImageRecord,
    config::LayoutStrategy,
    foundation::core::Extent,
    foundation::error::{StitchError, StitchResult},
};

/// One image positioned on the output canvas.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Placement {
    /// The source image to paint.
    pub record: ImageRecord,
    /// Left edge in canvas pixels.
    pub left: u32,
    /// Top edge in canvas pixels.
    pub top: u32,
}

/// Canvas size and per-image placements produced by the planner.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LayoutPlan {
    /// Output canvas dimensions.
    pub canvas: Extent,
    /// Placements in paint order; later entries paint over earlier ones.
    pub placements: Vec<Placement>,
}

/// Compute the canvas size and a placement for every record.
///
/// `records` must already be in the deterministic `(name, path)` sort order
/// produced by [`probe_all`](crate::probe_all); the plan preserves that order
/// as the paint order. An empty record set is a [`StitchError::NoInput`].
pub fn plan_layout(
    records: &[ImageRecord],
    strategy: LayoutStrategy,
    fixed_columns: u32,
    padding_px: u32,
) -> StitchResult<LayoutPlan> {
    if records.is_empty() {
        return Err(StitchError::no_input("cannot lay out an empty image set"));
    }

    match strategy {
        LayoutStrategy::FixedGrid => plan_fixed_grid(records, fixed_columns),
        LayoutStrategy::PackedGrid => plan_packed_grid(records, padding_px),
    }
}

/// Uniform grid: every cell takes the dimensions of the first record.
///
/// Known limitation: images that differ from the first record's size are
/// still placed on the uniform cell grid and may overlap neighbours or clip
/// at the canvas edge.
fn plan_fixed_grid(records: &[ImageRecord], columns: u32) -> StitchResult<LayoutPlan> {
    if columns == 0 {
        return Err(StitchError::validation("fixed grid columns must be >= 1"));
    }

    let cell_w = records[0].width;
    let cell_h = records[0].height;
    let count: u32 = records
        .len()
        .try_into()
        .map_err(|_| StitchError::validation("image count exceeds u32"))?;
    let rows = count.div_ceil(columns);

    let canvas = Extent::new(checked_mul(columns, cell_w)?, checked_mul(rows, cell_h)?)?;

    let mut placements = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let i = i as u32;
        placements.push(Placement {
            record: record.clone(),
            left: (i % columns) * cell_w,
            top: (i / columns) * cell_h,
        });
    }

    Ok(LayoutPlan { canvas, placements })
}

/// Row packing: images keep their own sizes and each row is as tall as its
/// tallest image. The column count targets a square-ish grid,
/// `ceil(sqrt(n))`.
fn plan_packed_grid(records: &[ImageRecord], padding_px: u32) -> StitchResult<LayoutPlan> {
    let count: u32 = records
        .len()
        .try_into()
        .map_err(|_| StitchError::validation("image count exceeds u32"))?;
    let columns = (f64::from(count).sqrt().ceil() as u32).max(1);

    let mut current_x = 0u32;
    let mut current_y = 0u32;
    let mut max_height_in_row = 0u32;
    let mut col_index = 0u32;
    let mut canvas_w = 0u32;

    let mut placements = Vec::with_capacity(records.len());
    for record in records {
        placements.push(Placement {
            record: record.clone(),
            left: current_x,
            top: current_y,
        });

        // Width tracks the rightmost covered pixel; the trailing padding
        // advance below never contributes to it.
        canvas_w = canvas_w.max(checked_add(current_x, record.width)?);
        max_height_in_row = max_height_in_row.max(record.height);
        col_index += 1;

        if col_index >= columns {
            current_y = checked_add(current_y, checked_add(max_height_in_row, padding_px)?)?;
            current_x = 0;
            col_index = 0;
            max_height_in_row = 0;
        } else {
            current_x = checked_add(current_x, checked_add(record.width, padding_px)?)?;
        }
    }

    let canvas = Extent::new(canvas_w, checked_add(current_y, max_height_in_row)?)?;
    Ok(LayoutPlan { canvas, placements })
}

fn checked_mul(a: u32, b: u32) -> StitchResult<u32> {
    a.checked_mul(b)
        .ok_or_else(|| StitchError::validation("canvas dimensions overflow u32"))
}

fn checked_add(a: u32, b: u32) -> StitchResult<u32> {
    a.checked_add(b)
        .ok_or_else(|| StitchError::validation("canvas dimensions overflow u32"))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/planner.rs"]
mod tests;
