//! Row partitioning - the pass shared by measuring and placing.
//!
//! Items are taken greedily left to right. A new row starts when appending the
//! next item would push the row past the available width. A row always accepts
//! its first item, so an item wider than the available width sits alone in
//! its own row instead of being dropped.

use std::ops::Range;

use serde::Serialize;

use crate::error::{LayoutError, Result};
use crate::primitives::Size;

use super::config::LayoutConfig;

/// A maximal run of consecutive items laid out on one line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    /// Indices of the items in this row, in input order.
    pub items: Range<usize>,
    /// Sum of item widths plus the spacing between them (no trailing spacing).
    pub content_width: f32,
    /// Height of the tallest item in the row.
    pub height: f32,
}

impl Row {
    /// Iterate the item indices of this row.
    #[inline]
    pub fn indices(&self) -> Range<usize> {
        self.items.clone()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Split `items` into rows that fit `available_width`.
///
/// Total over any input: a non-positive (or NaN) width degrades to one item
/// per row, and every item lands in exactly one row. Callers that accept
/// untrusted sizes should go through [`validate_inputs`] first.
pub fn partition(items: &[Size], available_width: f32, spacing: f32) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut row_start = 0usize;
    let mut current_x = 0.0f32;
    let mut row_height = 0.0f32;

    for (index, size) in items.iter().enumerate() {
        // Only wrap once the row holds something; a lone oversize item keeps its row.
        if index > row_start && current_x + size.width > available_width {
            rows.push(close_row(rows.len(), row_start..index, current_x, spacing, row_height));
            row_start = index;
            current_x = 0.0;
            row_height = 0.0;
        }

        current_x += size.width + spacing;
        row_height = row_height.max(size.height);
    }

    if row_start < items.len() {
        rows.push(close_row(rows.len(), row_start..items.len(), current_x, spacing, row_height));
    }

    rows
}

fn close_row(
    row_index: usize,
    items: Range<usize>,
    current_x: f32,
    spacing: f32,
    height: f32,
) -> Row {
    let content_width = current_x - spacing;
    tracing::trace!(
        row = row_index,
        first = items.start,
        count = items.len(),
        content_width,
        height,
        "closed flow row"
    );
    Row {
        items,
        content_width,
        height,
    }
}

/// Pair each row with its top offset, rows stacked downward from zero.
///
/// Measuring and placing both derive their vertical geometry from this
/// iterator, so the measured height always matches the placed bottom edge.
pub fn stack_rows(rows: &[Row], spacing: f32) -> impl Iterator<Item = (&Row, f32)> {
    rows.iter().scan(0.0f32, move |y, row| {
        let top = *y;
        *y += row.height + spacing;
        Some((row, top))
    })
}

/// Height of the stacked rows: the last row's bottom edge.
pub fn stacked_height(rows: &[Row], spacing: f32) -> f32 {
    stack_rows(rows, spacing)
        .last()
        .map(|(row, top)| top + row.height)
        .unwrap_or(0.0)
}

/// Check a layout call's inputs against the contract.
///
/// Spacing is checked first, then each item in order, then the width. Zero,
/// negative and infinite widths are accepted; only NaN is refused.
pub fn validate_inputs(items: &[Size], available_width: f32, config: &LayoutConfig) -> Result<()> {
    config.validate()?;

    if let Some((index, size)) = items.iter().enumerate().find(|(_, size)| !size.is_valid()) {
        tracing::debug!(index, width = size.width, height = size.height, "rejecting item size");
        return Err(LayoutError::InvalidItemSize {
            index,
            width: size.width,
            height: size.height,
        });
    }

    if available_width.is_nan() {
        tracing::debug!("rejecting NaN available width");
        return Err(LayoutError::InvalidWidth(available_width));
    }

    Ok(())
}
