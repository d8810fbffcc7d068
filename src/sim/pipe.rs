//! Pipe pairs
//!
//! A pair is a top and bottom pipe sharing one horizontal position and one gap.
//! Each pipe carries a collidable cap at its gap edge. Pairs are plain values;
//! all shared dimensions live in [`PipeGeometry`].

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

/// Dimensions shared by every pipe pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeGeometry {
    /// Vertical opening between top and bottom pipe
    pub gap: f32,
    pub width: f32,
    pub height: f32,
    pub cap_width: f32,
    pub cap_height: f32,
    /// How far the cap sticks out left of the pipe body
    pub cap_overhang: f32,
    /// How far the cap sinks into the pipe body
    pub cap_overlap: f32,
}

impl From<&Tuning> for PipeGeometry {
    fn from(t: &Tuning) -> Self {
        Self {
            gap: t.pipe_gap,
            width: t.pipe_width,
            height: t.pipe_height,
            cap_width: t.cap_width,
            cap_height: t.cap_height,
            cap_overhang: t.cap_overhang,
            cap_overlap: t.cap_overlap,
        }
    }
}

/// The four collidable rectangles of a pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeRects {
    pub top: Rect,
    pub bottom: Rect,
    pub top_cap: Rect,
    pub bottom_cap: Rect,
}

impl PipeRects {
    pub fn iter(&self) -> impl Iterator<Item = &Rect> {
        [&self.top, &self.bottom, &self.top_cap, &self.bottom_cap].into_iter()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.iter().any(|r| r.intersects(other))
    }
}

/// One top/bottom obstacle pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipePair {
    /// Left edge of both pipe bodies
    pub left: f32,
    /// Vertical center of the gap
    pub gap_center_y: f32,
    /// Set once the bird has passed this pair; cleared on respawn
    pub scored: bool,
}

impl PipePair {
    pub fn new(left: f32, gap_center_y: f32) -> Self {
        Self {
            left,
            gap_center_y,
            scored: false,
        }
    }

    /// Scroll left by `speed`
    #[inline]
    pub fn advance(&mut self, speed: f32) {
        self.left -= speed;
    }

    /// Trailing edge of the pipe bodies
    #[inline]
    pub fn right(&self, geom: &PipeGeometry) -> f32 {
        self.left + geom.width
    }

    /// True once the pipe bodies have fully left the screen on the left
    pub fn is_off_screen(&self, geom: &PipeGeometry) -> bool {
        self.right(geom) < 0.0
    }

    /// Move to a new slot position with a fresh gap
    pub fn respawn(&mut self, left: f32, gap_center_y: f32) {
        self.left = left;
        self.gap_center_y = gap_center_y;
        self.scored = false;
    }

    pub fn rects(&self, geom: &PipeGeometry) -> PipeRects {
        let half_gap = geom.gap / 2.0;
        let top = Rect::new(
            self.left,
            self.gap_center_y - half_gap - geom.height,
            geom.width,
            geom.height,
        );
        let bottom = Rect::new(
            self.left,
            self.gap_center_y + half_gap,
            geom.width,
            geom.height,
        );
        let cap_left = self.left - geom.cap_overhang;
        PipeRects {
            top,
            bottom,
            top_cap: Rect::new(
                cap_left,
                top.bottom() - geom.cap_overlap,
                geom.cap_width,
                geom.cap_height,
            ),
            bottom_cap: Rect::new(
                cap_left,
                bottom.top() - geom.cap_overlap,
                geom.cap_width,
                geom.cap_height,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geom() -> PipeGeometry {
        PipeGeometry::from(&Tuning::default())
    }

    #[test]
    fn test_rect_layout() {
        let pair = PipePair::new(500.0, 300.0);
        let r = pair.rects(&geom());

        // Gap of 200 centered on 300
        assert_eq!(r.top.bottom(), 200.0);
        assert_eq!(r.bottom.top(), 400.0);
        assert_eq!(r.top.top(), 200.0 - 350.0);
        assert_eq!(r.top.size.x, 60.0);

        // Caps are wider, shifted left, and sink 20 into the body
        assert_eq!(r.top_cap.left(), 490.0);
        assert_eq!(r.top_cap.right(), 570.0);
        assert_eq!(r.top_cap.top(), 180.0);
        assert_eq!(r.top_cap.bottom(), 220.0);
        assert_eq!(r.bottom_cap.top(), 380.0);
        assert_eq!(r.bottom_cap.bottom(), 420.0);
    }

    #[test]
    fn test_off_screen_uses_right_edge() {
        let g = geom();
        let mut pair = PipePair::new(10.0, 300.0);
        pair.advance(60.0);
        assert_eq!(pair.left, -50.0);
        assert!(!pair.is_off_screen(&g));
        pair.advance(10.0);
        // right edge exactly 0 is still on screen
        assert!(!pair.is_off_screen(&g));
        pair.advance(0.5);
        assert!(pair.is_off_screen(&g));
    }

    #[test]
    fn test_respawn_clears_scored() {
        let mut pair = PipePair::new(-100.0, 300.0);
        pair.scored = true;
        pair.respawn(900.0, 280.0);
        assert_eq!(pair, PipePair::new(900.0, 280.0));
    }

    #[test]
    fn test_cap_is_collidable() {
        let pair = PipePair::new(500.0, 300.0);
        let r = pair.rects(&geom());
        // Inside the gap, only overlapping the cap's lower lip
        let probe = Rect::new(495.0, 205.0, 4.0, 4.0);
        assert!(!r.top.intersects(&probe));
        assert!(r.top_cap.intersects(&probe));
        assert!(r.intersects(&probe));
        // Clear of everything in the middle of the gap
        assert!(!r.intersects(&Rect::new(510.0, 290.0, 20.0, 20.0)));
    }
}
