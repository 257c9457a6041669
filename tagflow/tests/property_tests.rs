//! Property-based tests for the flow layout.
//!
//! Sizes and spacing are whole numbers so that every sum the layout computes
//! is exact in `f32`, which lets the width bound be checked without epsilons.

use proptest::prelude::*;
use tagflow::{Alignment, LayoutConfig, Rect, Size, measure, partition, place};

// -- Strategies --

fn size_strategy() -> impl Strategy<Value = Size> {
    (0u16..200, 0u16..60).prop_map(|(w, h)| Size::new(f32::from(w), f32::from(h)))
}

fn items_strategy() -> impl Strategy<Value = Vec<Size>> {
    prop::collection::vec(size_strategy(), 0..40)
}

fn alignment_strategy() -> impl Strategy<Value = Alignment> {
    prop_oneof![
        Just(Alignment::Leading),
        Just(Alignment::Center),
        Just(Alignment::Trailing),
    ]
}

fn config_strategy() -> impl Strategy<Value = LayoutConfig> {
    (alignment_strategy(), 0u8..20)
        .prop_map(|(alignment, s)| LayoutConfig::new(alignment, f32::from(s)))
}

fn width_strategy() -> impl Strategy<Value = f32> {
    (0u16..400).prop_map(f32::from)
}

// -- Properties --

proptest! {
    #[test]
    fn every_item_placed_once(
        items in items_strategy(),
        width in width_strategy(),
        config in config_strategy(),
    ) {
        let placements = place(&items, Rect::with_width(width), &config).unwrap();
        prop_assert_eq!(placements.len(), items.len());
        for (placement, size) in placements.iter().zip(&items) {
            prop_assert_eq!(placement.size(), *size);
        }
    }

    #[test]
    fn rows_cover_input_in_order(
        items in items_strategy(),
        width in width_strategy(),
        spacing in 0u8..20,
    ) {
        let rows = partition(&items, width, f32::from(spacing));
        let mut next = 0;
        for row in &rows {
            prop_assert!(!row.is_empty());
            prop_assert_eq!(row.items.start, next);
            next = row.items.end;
        }
        prop_assert_eq!(next, items.len());
    }

    #[test]
    fn rows_fit_unless_single_item(
        items in items_strategy(),
        width in width_strategy(),
        spacing in 0u8..20,
    ) {
        let spacing = f32::from(spacing);
        for row in partition(&items, width, spacing) {
            if row.len() > 1 {
                prop_assert!(row.content_width <= width);
            }
            let widths: f32 = items[row.indices()].iter().map(|s| s.width).sum();
            let gaps = spacing * (row.len() - 1) as f32;
            prop_assert_eq!(row.content_width, widths + gaps);

            let tallest = items[row.indices()].iter().map(|s| s.height).fold(0.0f32, f32::max);
            prop_assert_eq!(row.height, tallest);
        }
    }

    #[test]
    fn measure_matches_placed_bottom(
        items in items_strategy(),
        width in width_strategy(),
        config in config_strategy(),
    ) {
        let size = measure(&items, width, &config).unwrap();
        let placements = place(&items, Rect::with_width(width), &config).unwrap();

        let bottom = placements.iter().map(|p| p.bottom()).fold(0.0f32, f32::max);
        prop_assert_eq!(size.height, bottom);
        if !items.is_empty() {
            prop_assert_eq!(size.width, width);
        }
    }

    #[test]
    fn rows_share_top_edge_and_descend(
        items in items_strategy(),
        width in width_strategy(),
        config in config_strategy(),
    ) {
        let rows = partition(&items, width, config.spacing);
        let placements = place(&items, Rect::with_width(width), &config).unwrap();

        let mut expected_top = 0.0f32;
        for row in &rows {
            let row_placements = &placements[row.indices()];
            let top = row_placements[0].y;
            prop_assert_eq!(top, expected_top);
            prop_assert!(row_placements.iter().all(|p| p.y == top));
            expected_top += row.height + config.spacing;

            // Items advance left to right within the row.
            for pair in row_placements.windows(2) {
                prop_assert_eq!(pair[1].x, pair[0].x + (pair[0].width + config.spacing));
            }
        }
    }

    #[test]
    fn place_is_deterministic(
        items in items_strategy(),
        width in width_strategy(),
        config in config_strategy(),
    ) {
        let bounds = Rect::new(3.0, 7.0, width, f32::INFINITY);
        let first = place(&items, bounds, &config).unwrap();
        let second = place(&items, bounds, &config).unwrap();
        prop_assert_eq!(first, second);
    }
}
