//! Flow layout for Tagflow.
//!
//! Arranges variably sized items into left-to-right rows that wrap at the
//! available width. Two passes share one row partitioning:
//!
//! ```text
//! sizes -> partition() -> rows -> measure()  (bounding size)
//!                              -> place()    (per-item positions)
//! ```
//!
//! Both passes are pure functions of their inputs and keep no state between
//! calls; the host re-runs them whenever items, sizes or width change.

pub mod config;
pub mod flow;
pub mod measure;
pub mod place;
pub mod row;

pub use config::{Alignment, LayoutConfig, DEFAULT_SPACING};
pub use flow::{Arrangement, FlowLayout, LayoutItem};
pub use measure::measure;
pub use place::{Placement, place};
pub use row::{Row, partition};
