use super::*;
use std::path::PathBuf;

fn record(name: &str, width: u32, height: u32) -> ImageRecord {
    ImageRecord {
        path: PathBuf::from("tiles").join(name),
        name: name.to_string(),
        width,
        height,
    }
}

fn uniform_records(count: usize, width: u32, height: u32) -> Vec<ImageRecord> {
    (0..count)
        .map(|i| record(&format!("t{i:02}.png"), width, height))
        .collect()
}

#[test]
fn fixed_grid_positions_follow_the_row_major_formula() {
    let records = uniform_records(10, 16, 12);
    let plan = plan_layout(&records, LayoutStrategy::FixedGrid, 4, 0).unwrap();

    assert_eq!(plan.canvas, Extent::new(64, 36).unwrap());
    for (i, placement) in plan.placements.iter().enumerate() {
        let i = i as u32;
        assert_eq!(placement.left, (i % 4) * 16);
        assert_eq!(placement.top, (i / 4) * 12);
    }
}

#[test]
fn fixed_grid_canvas_spans_all_columns_even_when_partially_filled() {
    let records = uniform_records(3, 10, 10);
    let plan = plan_layout(&records, LayoutStrategy::FixedGrid, 8, 0).unwrap();
    assert_eq!(plan.canvas, Extent::new(80, 10).unwrap());
}

#[test]
fn fixed_grid_cell_size_comes_from_the_first_sorted_record() {
    // Mixed sizes are a documented limitation: everything is placed on the
    // first record's cell grid.
    let records = vec![record("a.png", 8, 8), record("b.png", 20, 20)];
    let plan = plan_layout(&records, LayoutStrategy::FixedGrid, 2, 0).unwrap();

    assert_eq!(plan.canvas, Extent::new(16, 8).unwrap());
    assert_eq!((plan.placements[1].left, plan.placements[1].top), (8, 0));
}

#[test]
fn fixed_grid_dimension_overflow_is_rejected() {
    let records = uniform_records(2, u32::MAX, 1);
    let err = plan_layout(&records, LayoutStrategy::FixedGrid, 8, 0).unwrap_err();
    assert!(matches!(err, StitchError::Validation(_)));
}

#[test]
fn packed_grid_single_image_is_identity() {
    let records = uniform_records(1, 7, 9);
    let plan = plan_layout(&records, LayoutStrategy::PackedGrid, 8, 0).unwrap();

    assert_eq!(plan.canvas, Extent::new(7, 9).unwrap());
    assert_eq!(plan.placements.len(), 1);
    assert_eq!((plan.placements[0].left, plan.placements[0].top), (0, 0));
}

#[test]
fn packed_grid_four_identical_tiles_form_a_two_by_two() {
    let records = uniform_records(4, 10, 6);
    let plan = plan_layout(&records, LayoutStrategy::PackedGrid, 8, 0).unwrap();

    let positions: Vec<_> = plan.placements.iter().map(|p| (p.left, p.top)).collect();
    assert_eq!(positions, [(0, 0), (10, 0), (0, 6), (10, 6)]);
    assert_eq!(plan.canvas, Extent::new(20, 12).unwrap());
}

#[test]
fn packed_grid_rows_are_as_tall_as_their_tallest_image() {
    let records = vec![
        record("a.png", 10, 6),
        record("b.png", 10, 12),
        record("c.png", 10, 4),
        record("d.png", 10, 8),
    ];
    let plan = plan_layout(&records, LayoutStrategy::PackedGrid, 8, 0).unwrap();

    let positions: Vec<_> = plan.placements.iter().map(|p| (p.left, p.top)).collect();
    assert_eq!(positions, [(0, 0), (10, 0), (0, 12), (10, 12)]);
    assert_eq!(plan.canvas, Extent::new(20, 20).unwrap());
}

#[test]
fn packed_grid_padding_separates_cells() {
    let records = uniform_records(4, 10, 6);
    let plan = plan_layout(&records, LayoutStrategy::PackedGrid, 8, 2).unwrap();

    let positions: Vec<_> = plan.placements.iter().map(|p| (p.left, p.top)).collect();
    assert_eq!(positions, [(0, 0), (12, 0), (0, 8), (12, 8)]);
    // Width stops at the rightmost covered pixel; height keeps the closed
    // final row's trailing padding.
    assert_eq!(plan.canvas, Extent::new(22, 16).unwrap());
}

#[test]
fn packed_grid_placements_stay_within_the_canvas() {
    let records = vec![
        record("a.png", 5, 9),
        record("b.png", 12, 3),
        record("c.png", 7, 14),
        record("d.png", 9, 2),
        record("e.png", 4, 11),
    ];
    let plan = plan_layout(&records, LayoutStrategy::PackedGrid, 8, 3).unwrap();

    for placement in &plan.placements {
        assert!(placement.left + placement.record.width <= plan.canvas.width);
        assert!(placement.top + placement.record.height <= plan.canvas.height);
    }
}

#[test]
fn empty_set_is_no_input() {
    let err = plan_layout(&[], LayoutStrategy::FixedGrid, 8, 0).unwrap_err();
    assert!(matches!(err, StitchError::NoInput(_)));

    let err = plan_layout(&[], LayoutStrategy::PackedGrid, 8, 0).unwrap_err();
    assert!(matches!(err, StitchError::NoInput(_)));
}

#[test]
fn planning_is_deterministic() {
    let records = vec![
        record("a.png", 5, 9),
        record("b.png", 12, 3),
        record("c.png", 7, 14),
    ];
    for strategy in [LayoutStrategy::FixedGrid, LayoutStrategy::PackedGrid] {
        let first = plan_layout(&records, strategy, 8, 1).unwrap();
        let second = plan_layout(&records, strategy, 8, 1).unwrap();
        assert_eq!(first, second);
    }
}
