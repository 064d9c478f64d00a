//! Configuration errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid color {0:?}")]
    InvalidColor(String),

    #[error("opacity must be within [0, 1], got {0}")]
    InvalidOpacity(f32),

    #[error("speed must be a non-negative finite number, got {0}")]
    InvalidSpeed(f32),

    #[error("colorful mode needs a non-empty color palette")]
    EmptyPalette,

    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}
