//! The pipe field
//!
//! A fixed set of pipe-pair slots allocated once per session. Pairs that scroll
//! off the left edge are moved behind the trailing pair instead of being
//! dropped, so consecutive origins always stay exactly `spacing` apart.

use rand::Rng;
use rand_pcg::Pcg32;

use super::bird::Bird;
use super::pipe::{PipeGeometry, PipePair, PipeRects};
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Rotating set of pipe pairs plus the RNG that places their gaps
#[derive(Debug, Clone)]
pub struct PipeField {
    pairs: Vec<PipePair>,
    capacity: usize,
    geometry: PipeGeometry,
    spacing: f32,
    max_offset: f32,
    /// Vertical center of the gap band (half the screen height)
    mid_y: f32,
    rng: Pcg32,
}

impl PipeField {
    /// Create an empty field; call [`PipeField::initialize`] before use
    pub fn new(tuning: &Tuning, rng: Pcg32) -> Result<Self, ConfigError> {
        if tuning.pipe_pairs == 0 {
            return Err(ConfigError::NoPipePairs);
        }
        Ok(Self {
            pairs: Vec::with_capacity(tuning.pipe_pairs),
            capacity: tuning.pipe_pairs,
            geometry: PipeGeometry::from(tuning),
            spacing: tuning.pipe_spacing,
            max_offset: tuning.max_offset,
            mid_y: 0.0,
            rng,
        })
    }

    /// Lay out every slot just past the right edge, evenly spaced.
    /// Reuses slot storage, so restarting a session does not allocate.
    pub fn initialize(&mut self, screen_width: f32, screen_height: f32) -> Result<(), ConfigError> {
        super::state::validate_screen(screen_width, screen_height)?;

        self.mid_y = screen_height / 2.0;
        self.pairs.clear();
        for i in 0..self.capacity {
            let gap_center_y = self.random_gap_center();
            self.pairs
                .push(PipePair::new(screen_width + i as f32 * self.spacing, gap_center_y));
        }
        Ok(())
    }

    pub fn pairs(&self) -> &[PipePair] {
        &self.pairs
    }

    pub fn geometry(&self) -> &PipeGeometry {
        &self.geometry
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Rectangles for every pair, in slot order
    pub fn rects(&self) -> impl Iterator<Item = PipeRects> + '_ {
        self.pairs.iter().map(|p| p.rects(&self.geometry))
    }

    /// Scroll every pair left by `speed`
    pub fn advance(&mut self, speed: f32) {
        for pair in &mut self.pairs {
            pair.advance(speed);
        }
    }

    /// Move the pair in `slot` behind the trailing pair with a fresh gap
    pub fn recycle(&mut self, slot: usize) {
        let trailing_left = self
            .pairs
            .iter()
            .map(|p| p.left)
            .fold(f32::NEG_INFINITY, f32::max);
        // Origins, not right edges, step by `spacing`: stacking the pipe width
        // on top would let consecutive pairs drift `pipe_width` further apart
        let left = trailing_left + self.spacing;

        if slot < self.pairs.len() {
            let gap_center_y = self.random_gap_center();
            let pair = &mut self.pairs[slot];
            log::debug!(
                "Recycling pipe slot {} to x={:.1} gap_y={:.1}",
                slot,
                left,
                gap_center_y
            );
            pair.respawn(left, gap_center_y);
        }
    }

    /// Recycle every pair that is fully off-screen, leftmost first.
    /// Returns the recycled slots.
    pub fn recycle_off_screen(&mut self) -> Vec<usize> {
        let mut recycled = Vec::new();
        // Each slot is recycled at most once per call
        for _ in 0..self.pairs.len() {
            let leftmost_gone = self
                .pairs
                .iter()
                .enumerate()
                .filter(|(slot, p)| p.is_off_screen(&self.geometry) && !recycled.contains(slot))
                .min_by(|(_, a), (_, b)| a.left.total_cmp(&b.left))
                .map(|(slot, _)| slot);

            match leftmost_gone {
                Some(slot) => {
                    self.recycle(slot);
                    recycled.push(slot);
                }
                None => break,
            }
        }
        recycled
    }

    /// True if the bird overlaps any pipe body or cap
    pub fn check_collision(&self, bird: &Bird) -> bool {
        let bounds = bird.bounds();
        self.rects().any(|r| r.intersects(&bounds))
    }

    /// Mark every unscored pair the bird has passed and return how many there were
    pub fn check_score(&mut self, bird: &Bird) -> u32 {
        let mut passed = 0;
        for pair in &mut self.pairs {
            if !pair.scored && bird.pos.x > pair.right(&self.geometry) {
                pair.scored = true;
                passed += 1;
            }
        }
        passed
    }

    fn random_gap_center(&mut self) -> f32 {
        let offset = if self.max_offset > 0.0 {
            self.rng.random_range(-self.max_offset..=self.max_offset)
        } else {
            0.0
        };
        self.mid_y + offset
    }
}
