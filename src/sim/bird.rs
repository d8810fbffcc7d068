//! The player's bird
//!
//! The bird never moves horizontally; the world scrolls past it. Velocity and
//! position are in units per tick, integrated with explicit Euler.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Bird physics body with a square hitbox
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Top-left of the hitbox. `x` is fixed for the bird's lifetime.
    pub pos: Vec2,
    /// Vertical velocity (positive is down)
    pub velocity: f32,
    /// Hitbox side length
    pub size: f32,
    gravity: f32,
    jump_force: f32,
}

impl Bird {
    pub fn new(pos: Vec2, size: f32, gravity: f32, jump_force: f32) -> Self {
        Self {
            pos,
            velocity: 0.0,
            size,
            gravity,
            jump_force,
        }
    }

    /// Apply one tick of gravity. No clamping: leaving the screen is the caller's concern.
    pub fn update(&mut self) {
        self.velocity += self.gravity;
        self.pos.y += self.velocity;
    }

    /// Replace the current velocity with the jump impulse
    pub fn jump(&mut self) {
        self.velocity = self.jump_force;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bird() -> Bird {
        Bird::new(Vec2::new(100.0, 300.0), 45.0, 0.7, -10.0)
    }

    #[test]
    fn test_gravity_integration() {
        let mut b = bird();
        b.update();
        assert!((b.velocity - 0.7).abs() < 1e-6);
        assert!((b.pos.y - 300.7).abs() < 1e-4);
        b.update();
        assert!((b.velocity - 1.4).abs() < 1e-6);
        assert!((b.pos.y - 302.1).abs() < 1e-4);
        assert_eq!(b.pos.x, 100.0);
    }

    #[test]
    fn test_jump_overrides_velocity() {
        let mut b = bird();
        for _ in 0..20 {
            b.update();
        }
        assert!(b.velocity > 10.0);
        b.jump();
        assert_eq!(b.velocity, -10.0);
        b.jump();
        assert_eq!(b.velocity, -10.0);
    }

    #[test]
    fn test_no_clamping_above_screen() {
        let mut b = Bird::new(Vec2::new(0.0, 5.0), 45.0, 0.7, -10.0);
        b.jump();
        b.update();
        assert!(b.pos.y < 0.0);
    }

    #[test]
    fn test_bounds_follow_position() {
        let mut b = bird();
        b.update();
        let r = b.bounds();
        assert_eq!(r.pos, b.pos);
        assert_eq!(r.size, Vec2::splat(45.0));
    }

    #[test]
    fn test_trajectory_is_reproducible() {
        let mut a = bird();
        let mut b = bird();
        for i in 0..200 {
            if i % 17 == 0 {
                a.jump();
                b.jump();
            }
            a.update();
            b.update();
        }
        assert_eq!(a, b);
    }
}
