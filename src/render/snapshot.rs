//! Per-frame read-only view of a session

use glam::Vec2;
use serde::Serialize;

use super::instance::{RectInstance, colors};
use crate::sim::{GamePhase, PipeRects, Rect, Session};

/// Degrees of bird tilt per unit of vertical velocity
const TILT_PER_VELOCITY: f32 = 5.0;

/// Bird position and pose for drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirdPose {
    pub pos: Vec2,
    pub size: f32,
    pub velocity: f32,
    /// Clockwise tilt in degrees around the hitbox center
    pub rotation_deg: f32,
}

/// Everything a host needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub screen: Vec2,
    pub bird: BirdPose,
    pub pipes: Vec<PipeRects>,
    pub score: u32,
    pub best_score: u32,
    pub speed_multiplier: f32,
    pub phase: GamePhase,
}

impl Session {
    /// Capture the state a host draws from
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            screen: self.screen,
            bird: BirdPose {
                pos: self.bird.pos,
                size: self.bird.size,
                velocity: self.bird.velocity,
                rotation_deg: bird_rotation_degrees(self.bird.velocity),
            },
            pipes: self.pipes.rects().collect(),
            score: self.score,
            best_score: self.best_score,
            speed_multiplier: self.speed_multiplier,
            phase: self.phase,
        }
    }
}

impl RenderSnapshot {
    /// Flatten pipes and bird into GPU instances, pipes first so the bird draws on top
    pub fn instances(&self) -> Vec<RectInstance> {
        let mut out = Vec::with_capacity(self.pipes.len() * 4 + 1);
        for pair in &self.pipes {
            out.push(RectInstance::from_rect(&pair.top, colors::PIPE, 0.0));
            out.push(RectInstance::from_rect(&pair.bottom, colors::PIPE, 0.0));
            out.push(RectInstance::from_rect(&pair.top_cap, colors::PIPE_CAP, 0.0));
            out.push(RectInstance::from_rect(&pair.bottom_cap, colors::PIPE_CAP, 0.0));
        }
        let bird = Rect {
            pos: self.bird.pos,
            size: Vec2::splat(self.bird.size),
        };
        out.push(RectInstance::from_rect(
            &bird,
            colors::BIRD,
            self.bird.rotation_deg.to_radians(),
        ));
        out
    }

    pub fn hud_text(&self) -> String {
        hud_text(self.score, self.speed_multiplier)
    }
}

/// Visual tilt for a vertical velocity: nose down when falling, up when rising
pub fn bird_rotation_degrees(velocity: f32) -> f32 {
    velocity * TILT_PER_VELOCITY
}

/// Score line shown in the corner, with the speed multiplier once it kicks in
pub fn hud_text(score: u32, speed_multiplier: f32) -> String {
    if speed_multiplier > 1.0 {
        format!("Score: {} (Speed: x{:.1})", score, speed_multiplier)
    } else {
        format!("Score: {}", score)
    }
}

/// Pulsing 0..1 glow for score and game-over text.
///
/// Driven by host wall-clock time, never by simulation ticks.
pub fn glow_intensity(seconds: f64) -> f32 {
    (((seconds * 3.0).sin() + 1.0) / 2.0) as f32
}
