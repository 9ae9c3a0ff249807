//! Error type shared across the workspace.
//!
//! Gameplay never errors: invalid inputs clamp, impossible placements skip.
//! Only structural preconditions at match setup are fatal.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BarrageError {
    #[error("terrain profile needs at least {min} samples, got {got}")]
    DegenerateTerrain { min: usize, got: usize },

    #[error("landscape dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("terrain samples must be strictly increasing in x (violated at index {index})")]
    UnorderedProfile { index: usize },

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BarrageError>;
