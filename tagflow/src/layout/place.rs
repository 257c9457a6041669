//! Placing pass: absolute positions for every item.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::primitives::{Point, Rect, Size};

use super::config::LayoutConfig;
use super::row::{Row, partition, stack_rows, validate_inputs};

/// Final position of one item, in the same coordinate space as the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Placement {
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

impl From<Placement> for Rect {
    fn from(p: Placement) -> Self {
        Rect::new(p.x, p.y, p.width, p.height)
    }
}

/// Position `items` inside `bounds`, wrapping at `bounds.width`.
///
/// Returns one placement per item, index-aligned with `items`. Every item in a
/// row shares the row's top edge. `bounds.height` is not consulted.
pub fn place(items: &[Size], bounds: Rect, config: &LayoutConfig) -> Result<Vec<Placement>> {
    if items.is_empty() {
        return Ok(Vec::new());
    }

    validate_inputs(items, bounds.width, config)?;

    let rows = partition(items, bounds.width, config.spacing);
    let placements = place_rows(items, &rows, bounds, config);

    tracing::debug!(
        items = items.len(),
        rows = rows.len(),
        alignment = ?config.alignment,
        "placed flow layout"
    );

    Ok(placements)
}

/// Assign positions for already partitioned rows.
pub(crate) fn place_rows(
    items: &[Size],
    rows: &[Row],
    bounds: Rect,
    config: &LayoutConfig,
) -> Vec<Placement> {
    let mut placements = Vec::with_capacity(items.len());

    for (row, top) in stack_rows(rows, config.spacing) {
        let y = bounds.y + top;
        let mut x = bounds.x + config.alignment.offset(bounds.width, row.content_width);

        for size in &items[row.indices()] {
            placements.push(Placement {
                x,
                y,
                width: size.width,
                height: size.height,
            });
            x += size.width + config.spacing;
        }
    }

    placements
}
