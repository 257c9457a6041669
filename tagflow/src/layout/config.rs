//! Flow layout configuration.
//!
//! A `LayoutConfig` is immutable for the duration of one layout call. It can be
//! built in code or loaded from JSON; missing fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Default spacing between items and between rows.
pub const DEFAULT_SPACING: f32 = 10.0;

/// Horizontal placement of each row's content within the available width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Pack the row against the left edge.
    Leading,
    /// Center the row.
    #[default]
    Center,
    /// Pack the row against the right edge.
    Trailing,
}

impl Alignment {
    /// Offset of a row of `content_width` inside `available_width`.
    ///
    /// Rows wider than the available space get a negative offset for
    /// `Center` and `Trailing`; the overflow is split or pushed left
    /// rather than clamped. An infinite width has no right edge to align
    /// against, so every alignment packs rows at the start.
    #[inline]
    pub fn offset(self, available_width: f32, content_width: f32) -> f32 {
        if !available_width.is_finite() {
            return 0.0;
        }
        match self {
            Alignment::Leading => 0.0,
            Alignment::Center => (available_width - content_width) / 2.0,
            Alignment::Trailing => available_width - content_width,
        }
    }
}

/// Alignment and spacing for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub alignment: Alignment,
    /// Gap between adjacent items in a row and between consecutive rows.
    pub spacing: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            alignment: Alignment::default(),
            spacing: DEFAULT_SPACING,
        }
    }
}

impl LayoutConfig {
    pub fn new(alignment: Alignment, spacing: f32) -> Self {
        Self { alignment, spacing }
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Reject spacing that would invert the overflow test.
    pub fn validate(&self) -> Result<()> {
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            tracing::debug!("rejecting layout config with spacing {}", self.spacing);
            return Err(LayoutError::InvalidSpacing(self.spacing));
        }
        Ok(())
    }

    /// Parse a JSON config and validate it.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: LayoutConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.alignment, Alignment::Center);
        assert_eq!(config.spacing, DEFAULT_SPACING);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_alignment_offsets() {
        assert_eq!(Alignment::Leading.offset(200.0, 90.0), 0.0);
        assert_eq!(Alignment::Center.offset(200.0, 90.0), 55.0);
        assert_eq!(Alignment::Trailing.offset(200.0, 90.0), 110.0);
        // Overflowing rows shift left of the origin.
        assert_eq!(Alignment::Trailing.offset(50.0, 100.0), -50.0);
    }

    #[test]
    fn test_alignment_offset_unbounded_width() {
        for alignment in [Alignment::Leading, Alignment::Center, Alignment::Trailing] {
            assert_eq!(alignment.offset(f32::INFINITY, 90.0), 0.0);
            assert_eq!(alignment.offset(f32::NEG_INFINITY, 90.0), 0.0);
        }
    }

    #[test]
    fn test_negative_spacing_rejected() {
        let err = LayoutConfig::default().with_spacing(-1.0).validate().unwrap_err();
        assert!(matches!(err, LayoutError::InvalidSpacing(s) if s == -1.0));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_non_finite_spacing_rejected() {
        assert!(LayoutConfig::default().with_spacing(f32::NAN).validate().is_err());
        assert!(LayoutConfig::default().with_spacing(f32::INFINITY).validate().is_err());
    }

    #[test]
    fn test_from_json_full() {
        let json = r#"{"alignment": "trailing", "spacing": 4}"#;
        let config = LayoutConfig::from_json(json).unwrap();
        assert_eq!(config, LayoutConfig::new(Alignment::Trailing, 4.0));
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let config = LayoutConfig::from_json(r#"{"alignment": "leading"}"#).unwrap();
        assert_eq!(config.alignment, Alignment::Leading);
        assert_eq!(config.spacing, DEFAULT_SPACING);
    }

    #[test]
    fn test_from_json_unknown_alignment() {
        let err = LayoutConfig::from_json(r#"{"alignment": "justify"}"#).unwrap_err();
        assert!(matches!(err, LayoutError::Config(_)));
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_from_json_negative_spacing() {
        let err = LayoutConfig::from_json(r#"{"spacing": -3}"#).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidSpacing(_)));
    }
}
