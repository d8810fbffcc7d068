//! Host-facing render data
//!
//! Nothing in here feeds back into the simulation. Hosts read a
//! [`RenderSnapshot`] after ticking and draw it however they like.

pub mod instance;
pub mod snapshot;

pub use instance::{RectInstance, colors};
pub use snapshot::{BirdPose, RenderSnapshot, bird_rotation_degrees, glow_intensity, hud_text};
