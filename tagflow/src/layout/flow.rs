//! FlowLayout - wrapping rows of arbitrary items.
//!
//! Items are laid out left to right until the next one would exceed the
//! available width, then wrap to a new row. Each row is aligned on its own.
//! `FlowLayout` works on anything that can report a size; it reads every
//! item's size once per call and keeps nothing between calls.

use serde::Serialize;

use crate::error::Result;
use crate::primitives::{Rect, Size};

use super::config::{Alignment, LayoutConfig};
use super::measure::measure;
use super::place::{Placement, place, place_rows};
use super::row::{Row, partition, stacked_height, validate_inputs};

// =========================================================================
// LayoutItem
// =========================================================================

/// Anything a flow layout can position.
pub trait LayoutItem {
    /// Intrinsic size of the item under the current width proposal.
    fn layout_size(&self) -> Size;
}

impl LayoutItem for Size {
    fn layout_size(&self) -> Size {
        *self
    }
}

impl LayoutItem for (f32, f32) {
    fn layout_size(&self) -> Size {
        Size::from(*self)
    }
}

impl<T: LayoutItem + ?Sized> LayoutItem for &T {
    fn layout_size(&self) -> Size {
        (**self).layout_size()
    }
}

fn collect_sizes<T: LayoutItem>(items: &[T]) -> Vec<Size> {
    items.iter().map(|item| item.layout_size()).collect()
}

// =========================================================================
// Arrangement
// =========================================================================

/// Measure and place results from a single partitioning pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Arrangement {
    /// Same value `measure` returns for these inputs.
    pub size: Size,
    pub rows: Vec<Row>,
    /// Index-aligned with the input items.
    pub placements: Vec<Placement>,
}

impl Arrangement {
    fn empty() -> Self {
        Self {
            size: Size::ZERO,
            rows: Vec::new(),
            placements: Vec::new(),
        }
    }

    /// Placements of one row's items, in order.
    pub fn row_placements(&self, row: &Row) -> &[Placement] {
        &self.placements[row.indices()]
    }
}

// =========================================================================
// FlowLayout
// =========================================================================

/// A flow layout that wraps items like CSS `flex-wrap: wrap`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlowLayout {
    config: LayoutConfig,
}

impl FlowLayout {
    /// Create a flow layout with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Set the per-row alignment.
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.config.alignment = alignment;
        self
    }

    /// Set spacing between items and between rows.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.config.spacing = spacing;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Rows the items break into at `available_width`.
    pub fn rows<T: LayoutItem>(&self, items: &[T], available_width: f32) -> Result<Vec<Row>> {
        let sizes = collect_sizes(items);
        if sizes.is_empty() {
            return Ok(Vec::new());
        }

        validate_inputs(&sizes, available_width, &self.config)?;
        Ok(partition(&sizes, available_width, self.config.spacing))
    }

    /// Bounding size for `available_width`.
    pub fn measure<T: LayoutItem>(&self, items: &[T], available_width: f32) -> Result<Size> {
        measure(&collect_sizes(items), available_width, &self.config)
    }

    /// Calculate the total height needed for a given width.
    pub fn height_for_width<T: LayoutItem>(
        &self,
        items: &[T],
        available_width: f32,
    ) -> Result<f32> {
        Ok(self.measure(items, available_width)?.height)
    }

    /// Positions for every item inside `bounds`.
    pub fn place<T: LayoutItem>(&self, items: &[T], bounds: Rect) -> Result<Vec<Placement>> {
        place(&collect_sizes(items), bounds, &self.config)
    }

    /// Measure and place in one pass.
    pub fn arrange<T: LayoutItem>(&self, items: &[T], bounds: Rect) -> Result<Arrangement> {
        let sizes = collect_sizes(items);
        if sizes.is_empty() {
            return Ok(Arrangement::empty());
        }

        validate_inputs(&sizes, bounds.width, &self.config)?;

        let rows = partition(&sizes, bounds.width, self.config.spacing);
        let placements = place_rows(&sizes, &rows, bounds, &self.config);
        let size = Size::new(bounds.width, stacked_height(&rows, self.config.spacing));

        tracing::debug!(
            items = sizes.len(),
            rows = rows.len(),
            width = size.width,
            height = size.height,
            "arranged flow layout"
        );

        Ok(Arrangement {
            size,
            rows,
            placements,
        })
    }
}

// =========================================================================
// Tests
// =========================================================================
