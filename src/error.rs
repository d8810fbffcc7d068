//! Error types
//!
//! The simulation itself cannot fail once a session exists; everything here is
//! raised while validating configuration.

use thiserror::Error;

/// Invalid screen size, tuning or clock, reported by `Session::new`,
/// `Tuning::validate` and `FixedStep::new`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("screen dimensions must be positive and finite, got {width}x{height}")]
    InvalidScreen { width: f32, height: f32 },

    #[error("at least one pipe pair is required")]
    NoPipePairs,

    #[error("tuning value `{name}` is out of range: {value}")]
    InvalidTuning { name: &'static str, value: f32 },

    #[error("`score_per_speed_step` must be at least 1")]
    ZeroScoreStep,

    #[error("clock needs a positive finite step and at least one substep, got {step}s x {max_substeps}")]
    InvalidClock { step: f32, max_substeps: u32 },
}

/// Failure loading a tuning document
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed tuning json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}
