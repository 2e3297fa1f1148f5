//! Error types

use thiserror::Error;

/// Contract violations detected by the simulation core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("level {level} out of range for tower of height {height}")]
    LevelOutOfRange { level: usize, height: usize },
}

/// Errors that can occur while loading or validating [`crate::Tuning`].
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning value for `{field}`: {value}")]
    Invalid { field: &'static str, value: f64 },
}
