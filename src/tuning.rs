//! Data-driven game balance
//!
//! Every physics and layout constant lives in [`Tuning`] so hosts can tweak the
//! feel of the game without touching simulation code. Missing JSON fields fall
//! back to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, TuningError};

/// Tunable game constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Bird ===
    /// Downward acceleration added to velocity every tick
    pub gravity: f32,
    /// Velocity set by a jump (negative is up)
    pub jump_force: f32,
    /// Side of the square bird hitbox
    pub bird_size: f32,

    // === Difficulty ===
    /// Pipe scroll speed at multiplier 1.0 (units per tick)
    pub base_pipe_speed: f32,
    /// Multiplier increase per completed score step
    pub speed_increase_per_step: f32,
    /// Points needed for each speed step
    pub score_per_speed_step: u32,
    /// Upper bound on the speed multiplier
    pub max_speed_multiplier: f32,

    // === Pipes ===
    pub pipe_gap: f32,
    pub pipe_spacing: f32,
    pub pipe_width: f32,
    pub pipe_height: f32,
    pub cap_width: f32,
    pub cap_height: f32,
    pub cap_overhang: f32,
    pub cap_overlap: f32,
    /// Max vertical shift of a gap center from mid-screen
    pub max_offset: f32,
    /// Number of pipe pairs kept in rotation
    pub pipe_pairs: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            bird_size: BIRD_SIZE,

            base_pipe_speed: BASE_PIPE_SPEED,
            speed_increase_per_step: SPEED_INCREASE_PER_STEP,
            score_per_speed_step: SCORE_PER_SPEED_STEP,
            max_speed_multiplier: MAX_SPEED_MULTIPLIER,

            pipe_gap: PIPE_GAP,
            pipe_spacing: PIPE_SPACING,
            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            cap_width: CAP_WIDTH,
            cap_height: CAP_HEIGHT,
            cap_overhang: CAP_OVERHANG,
            cap_overlap: CAP_OVERLAP,
            max_offset: MAX_OFFSET,
            pipe_pairs: PIPE_PAIRS,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON tuning document and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with. Nothing is clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pipe_pairs == 0 {
            return Err(ConfigError::NoPipePairs);
        }
        if self.score_per_speed_step == 0 {
            return Err(ConfigError::ZeroScoreStep);
        }

        finite("gravity", self.gravity)?;
        finite("jump_force", self.jump_force)?;
        positive("bird_size", self.bird_size)?;

        positive("base_pipe_speed", self.base_pipe_speed)?;
        non_negative("speed_increase_per_step", self.speed_increase_per_step)?;
        if !self.max_speed_multiplier.is_finite() || self.max_speed_multiplier < 1.0 {
            return Err(ConfigError::InvalidTuning {
                name: "max_speed_multiplier",
                value: self.max_speed_multiplier,
            });
        }

        positive("pipe_gap", self.pipe_gap)?;
        positive("pipe_spacing", self.pipe_spacing)?;
        positive("pipe_width", self.pipe_width)?;
        positive("pipe_height", self.pipe_height)?;
        non_negative("cap_width", self.cap_width)?;
        non_negative("cap_height", self.cap_height)?;
        finite("cap_overhang", self.cap_overhang)?;
        finite("cap_overlap", self.cap_overlap)?;
        non_negative("max_offset", self.max_offset)?;

        Ok(())
    }
}

fn finite(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidTuning { name, value })
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidTuning { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidTuning { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.5, "pipe_pairs": 4 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.5);
        assert_eq!(tuning.pipe_pairs, 4);
        assert_eq!(tuning.jump_force, JUMP_FORCE);
        assert_eq!(tuning.pipe_spacing, PIPE_SPACING);
    }

    #[test]
    fn test_zero_pipe_pairs_rejected() {
        let err = Tuning::from_json(r#"{ "pipe_pairs": 0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid(ConfigError::NoPipePairs)));
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let tuning = Tuning {
            pipe_spacing: -1.0,
            ..Default::default()
        };
        assert_eq!(
            tuning.validate(),
            Err(ConfigError::InvalidTuning {
                name: "pipe_spacing",
                value: -1.0
            })
        );

        let tuning = Tuning {
            max_speed_multiplier: 0.5,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());

        let tuning = Tuning {
            score_per_speed_step: 0,
            ..Default::default()
        };
        assert_eq!(tuning.validate(), Err(ConfigError::ZeroScoreStep));
    }

    #[test]
    fn test_malformed_json() {
        let err = Tuning::from_json("{ gravity: ").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Tuning::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, TuningError::Io { .. }));
    }
}
