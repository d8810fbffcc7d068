//! Fixed timestep accumulator
//!
//! Hosts render at whatever rate the display gives them; the simulation only
//! ever advances in whole ticks of `step` seconds. Frame rate never leaks into
//! physics.

use crate::consts::MAX_FRAME_DT;
use crate::error::ConfigError;

/// Converts variable frame deltas into a count of fixed simulation ticks
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl FixedStep {
    /// A zero or non-finite step, or a zero substep cap, would never tick
    pub fn new(step: f32, max_substeps: u32) -> Result<Self, ConfigError> {
        if !(step.is_finite() && step > 0.0) || max_substeps == 0 {
            return Err(ConfigError::InvalidClock { step, max_substeps });
        }
        Ok(Self {
            step,
            max_substeps,
            accumulator: 0.0,
        })
    }

    /// Length of one tick in seconds
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Feed a frame delta (seconds) and return how many ticks to run now
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let dt = frame_dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_substeps {
            self.accumulator -= self.step;
            ticks += 1;
        }

        // Drop backlog we refused to simulate
        if ticks == self.max_substeps && self.accumulator >= self.step {
            log::trace!("Clock dropped {:.3}s of backlog", self.accumulator);
            self.accumulator %= self.step;
        }

        ticks
    }

    /// Progress toward the next tick in [0, 1), for render interpolation
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
