//! Game state and core simulation types
//!
//! A [`Session`] owns the bird and the pipe field exclusively. Hosts mutate it
//! only through [`crate::sim::tick`] and the input handlers below.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::field::PipeField;
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; only a restart leaves this phase
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    /// Hit a pipe body or cap
    Pipe,
    /// Flew above the top of the screen
    Ceiling,
    /// Fell below the bottom of the screen
    Floor,
}

/// Things that happened during a tick, for hosts that play sounds or flash the HUD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Bird passed a pair; `score` is the new total
    Scored { score: u32 },
    /// Speed multiplier stepped up
    SpeedUp { multiplier: f32 },
    /// A pair left the screen and was moved to the back
    PipeRecycled { slot: usize },
    /// Run ended
    GameOver { cause: DeathCause, score: u32 },
}

/// Reject screen sizes the field cannot be laid out in
pub(crate) fn validate_screen(width: f32, height: f32) -> Result<(), ConfigError> {
    let ok = |v: f32| v.is_finite() && v > 0.0;
    if ok(width) && ok(height) {
        Ok(())
    } else {
        Err(ConfigError::InvalidScreen { width, height })
    }
}

/// One play session: bird, pipes, score and phase
#[derive(Debug, Clone)]
pub struct Session {
    /// Seed the pipe RNG was created from
    pub seed: u64,
    pub tuning: Tuning,
    pub screen: Vec2,
    pub bird: Bird,
    pub pipes: PipeField,
    pub score: u32,
    /// Best score reached since the process started (not persisted)
    pub best_score: u32,
    pub speed_multiplier: f32,
    pub phase: GamePhase,
    /// Simulation ticks since the current run started
    pub time_ticks: u64,
}

impl Session {
    /// Validate the configuration and start a new run
    pub fn new(
        tuning: Tuning,
        screen_width: f32,
        screen_height: f32,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        validate_screen(screen_width, screen_height)?;
        tuning.validate()?;

        let screen = Vec2::new(screen_width, screen_height);
        let mut pipes = PipeField::new(&tuning, Pcg32::seed_from_u64(seed))?;
        pipes.initialize(screen_width, screen_height)?;

        log::info!(
            "Session started: {}x{} screen, {} pipe pairs, seed {}",
            screen_width,
            screen_height,
            tuning.pipe_pairs,
            seed
        );

        Ok(Self {
            seed,
            bird: spawn_bird(&tuning, screen),
            pipes,
            tuning,
            screen,
            score: 0,
            best_score: 0,
            speed_multiplier: 1.0,
            phase: GamePhase::Playing,
            time_ticks: 0,
        })
    }

    /// Session with default tuning on the classic 800x600 playfield
    pub fn with_seed(seed: u64) -> Self {
        use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
        match Self::new(Tuning::default(), SCREEN_WIDTH, SCREEN_HEIGHT, seed) {
            Ok(session) => session,
            Err(e) => unreachable!("default tuning is valid: {e}"),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Flap. Ignored unless playing. Takes effect on the next tick.
    pub fn handle_jump(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.bird.jump();
        true
    }

    /// Start a fresh run. Ignored unless the current run is over.
    ///
    /// The whole bird and pipe state is replaced before this returns. The pipe
    /// RNG keeps its stream, so the new run gets a new layout.
    pub fn handle_restart(&mut self) -> bool {
        if self.phase != GamePhase::GameOver {
            return false;
        }

        self.bird = spawn_bird(&self.tuning, self.screen);
        if let Err(e) = self.pipes.initialize(self.screen.x, self.screen.y) {
            // Only reachable if the host overwrote `screen` with a bad size
            log::error!("Pipe field reinitialization failed: {e}");
            return false;
        }
        self.score = 0;
        self.speed_multiplier = 1.0;
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;

        log::info!("Session restarted (best score {})", self.best_score);
        true
    }

    /// Speed the pipes scroll at this tick
    pub fn current_speed(&self) -> f32 {
        self.tuning.base_pipe_speed * self.speed_multiplier
    }
}

/// Bird starts a third of the way across, vertically centered, at rest
fn spawn_bird(tuning: &Tuning, screen: Vec2) -> Bird {
    Bird::new(
        Vec2::new(screen.x / 3.0, screen.y / 2.0),
        tuning.bird_size,
        tuning.gravity,
        tuning.jump_force,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let s = Session::with_seed(1);
        assert_eq!(s.phase, GamePhase::Playing);
        assert_eq!(s.score, 0);
        assert_eq!(s.speed_multiplier, 1.0);
        assert!((s.bird.pos.x - 800.0 / 3.0).abs() < 1e-4);
        assert_eq!(s.bird.pos.y, 300.0);
        assert_eq!(s.bird.velocity, 0.0);
        assert_eq!(s.pipes.pairs().len(), crate::consts::PIPE_PAIRS);
        assert_eq!(s.pipes.pairs().len(), 2);
    }

    #[test]
    fn test_invalid_screen_fails_fast() {
        let err = Session::new(Tuning::default(), 0.0, 600.0, 1).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidScreen {
                width: 0.0,
                height: 600.0
            }
        );
        assert!(Session::new(Tuning::default(), 800.0, -600.0, 1).is_err());
        assert!(Session::new(Tuning::default(), f32::INFINITY, 600.0, 1).is_err());
    }

    #[test]
    fn test_zero_pipe_pairs_fails_fast() {
        let tuning = Tuning {
            pipe_pairs: 0,
            ..Default::default()
        };
        let err = Session::new(tuning, 800.0, 600.0, 1).unwrap_err();
        assert_eq!(err, ConfigError::NoPipePairs);
    }

    #[test]
    fn test_jump_only_while_playing() {
        let mut s = Session::with_seed(1);
        assert!(s.handle_jump());
        assert_eq!(s.bird.velocity, s.tuning.jump_force);

        s.phase = GamePhase::GameOver;
        s.bird.velocity = 3.0;
        assert!(!s.handle_jump());
        assert_eq!(s.bird.velocity, 3.0);
    }

    #[test]
    fn test_restart_while_playing_is_noop() {
        let mut s = Session::with_seed(1);
        s.score = 4;
        s.bird.pos.y = 123.0;
        let pipes_before = s.pipes.pairs().to_vec();

        assert!(!s.handle_restart());
        assert_eq!(s.score, 4);
        assert_eq!(s.bird.pos.y, 123.0);
        assert_eq!(s.phase, GamePhase::Playing);
        assert_eq!(s.pipes.pairs(), pipes_before.as_slice());
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut s = Session::with_seed(1);
        s.score = 12;
        s.best_score = 12;
        s.speed_multiplier = 2.0;
        s.bird.pos.y = 700.0;
        s.bird.velocity = 15.0;
        s.pipes.advance(500.0);
        s.phase = GamePhase::GameOver;

        assert!(s.handle_restart());
        assert_eq!(s.phase, GamePhase::Playing);
        assert_eq!(s.score, 0);
        assert_eq!(s.best_score, 12);
        assert_eq!(s.speed_multiplier, 1.0);
        assert_eq!(s.bird.pos.y, 300.0);
        assert_eq!(s.bird.velocity, 0.0);
        assert_eq!(s.pipes.pairs()[0].left, 800.0);
        assert!(s.pipes.pairs().iter().all(|p| !p.scored));
    }
}
