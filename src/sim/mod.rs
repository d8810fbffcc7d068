//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` = one step)
//! - Seeded RNG only
//! - Stable slot order for pipe pairs
//! - No rendering or platform dependencies

pub mod bird;
pub mod field;
pub mod pipe;
pub mod rect;
pub mod state;
pub mod tick;

pub use bird::Bird;
pub use field::PipeField;
pub use pipe::{PipeGeometry, PipePair, PipeRects};
pub use rect::Rect;
pub use state::{DeathCause, GameEvent, GamePhase, Session};
pub use tick::{speed_multiplier_for_score, tick};
