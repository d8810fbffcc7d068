//! Flappy - a side-scrolling arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bird physics, pipes, scoring, game state)
//! - `tuning`: Data-driven game balance
//! - `clock`: Fixed timestep accumulator for hosts
//! - `render`: Read-only render snapshot and presentation helpers
//!
//! Window creation, asset loading and drawing belong to the host. The host
//! creates a [`sim::Session`], calls [`sim::tick`] on a fixed cadence,
//! forwards jump/restart keys and draws from [`sim::Session::snapshot`].

pub mod clock;
pub mod error;
pub mod render;
pub mod sim;
pub mod tuning;

pub use clock::FixedStep;
pub use error::{ConfigError, TuningError};
pub use render::{RectInstance, RenderSnapshot};
pub use sim::{GameEvent, GamePhase, Session, tick};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (50 Hz, the classic 20 ms game timer)
    pub const SIM_DT: f32 = 0.020;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 5;
    /// Largest frame delta a host may feed the clock (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default playfield size
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Bird physics (units per tick)
    pub const GRAVITY: f32 = 0.7;
    pub const JUMP_FORCE: f32 = -10.0;
    /// Square hitbox side
    pub const BIRD_SIZE: f32 = 45.0;

    /// Difficulty ramp
    pub const BASE_PIPE_SPEED: f32 = 7.0;
    pub const SPEED_INCREASE_PER_STEP: f32 = 0.5;
    pub const SCORE_PER_SPEED_STEP: u32 = 5;
    pub const MAX_SPEED_MULTIPLIER: f32 = 3.0;

    /// Pipe layout
    pub const PIPE_GAP: f32 = 200.0;
    /// Horizontal distance between consecutive pair origins
    pub const PIPE_SPACING: f32 = 400.0;
    pub const PIPE_WIDTH: f32 = 60.0;
    pub const PIPE_HEIGHT: f32 = 350.0;
    /// Max random shift of the gap center from mid-screen
    pub const MAX_OFFSET: f32 = 60.0;
    /// Four pipes: two top/bottom pairs
    pub const PIPE_PAIRS: usize = 2;

    /// Pipe cap (collidable lip at the gap edge)
    pub const CAP_WIDTH: f32 = 80.0;
    pub const CAP_HEIGHT: f32 = 40.0;
    /// Cap extends this far left of the pipe body
    pub const CAP_OVERHANG: f32 = 10.0;
    /// Cap sinks this far into the pipe body
    pub const CAP_OVERLAP: f32 = 20.0;
}
