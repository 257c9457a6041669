//! Measuring pass: the bounding size a wrapped layout needs.

use crate::error::Result;
use crate::primitives::Size;

use super::config::LayoutConfig;
use super::row::{partition, stacked_height, validate_inputs};

/// Size required to lay out `items` within `available_width`.
///
/// The width always equals `available_width`; the height is the sum of the row
/// heights plus spacing between rows. Empty input measures as zero.
pub fn measure(items: &[Size], available_width: f32, config: &LayoutConfig) -> Result<Size> {
    if items.is_empty() {
        return Ok(Size::ZERO);
    }

    validate_inputs(items, available_width, config)?;

    let rows = partition(items, available_width, config.spacing);
    let height = stacked_height(&rows, config.spacing);

    tracing::debug!(
        items = items.len(),
        rows = rows.len(),
        available_width,
        height,
        "measured flow layout"
    );

    Ok(Size::new(available_width, height))
}
