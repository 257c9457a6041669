//! Tagflow: wrap-flow layout for tag clouds and other inline items.
//!
//! Given the measured sizes of an ordered list of items and a width to fill,
//! Tagflow breaks the items into rows, reports the size the arrangement needs,
//! and computes where each item goes. Rows are aligned independently
//! (leading, center or trailing) and a single spacing value separates both
//! items and rows.
//!
//! Tagflow does not measure or draw anything itself. The host supplies sizes
//! and renders at the returned positions.
//!
//! # Usage
//!
//! ```
//! use tagflow::{Alignment, FlowLayout, Rect, Size};
//!
//! let tags = [Size::new(40.0, 20.0), Size::new(40.0, 20.0)];
//! let flow = FlowLayout::new().alignment(Alignment::Trailing).spacing(10.0);
//!
//! let size = flow.measure(&tags, 200.0).unwrap();
//! assert_eq!(size, Size::new(200.0, 20.0));
//!
//! let placements = flow.place(&tags, Rect::with_width(200.0)).unwrap();
//! assert_eq!(placements[0].x, 110.0);
//! ```

// Core primitives
pub mod error;
pub mod primitives;

// Layout passes
pub mod layout;

// Re-export core types
pub use error::{LayoutError, Result};
pub use primitives::{Point, Rect, Size};

// Layout system exports
pub use layout::{
    Alignment, Arrangement, FlowLayout, LayoutConfig, LayoutItem, Placement, Row, measure,
    partition, place,
};
