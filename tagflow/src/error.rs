//! Layout error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid size for item {index}: {width}x{height}")]
    InvalidItemSize { index: usize, width: f32, height: f32 },

    #[error("invalid spacing: {0}")]
    InvalidSpacing(f32),

    #[error("invalid available width: {0}")]
    InvalidWidth(f32),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl LayoutError {
    /// Whether the caller broke the input contract (as opposed to a config
    /// file failing to parse).
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            LayoutError::InvalidItemSize { .. }
                | LayoutError::InvalidSpacing(_)
                | LayoutError::InvalidWidth(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, LayoutError>;
