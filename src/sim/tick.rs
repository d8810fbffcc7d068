//! Fixed timestep simulation tick
//!
//! Core game loop that advances a session deterministically.

use super::state::{DeathCause, GameEvent, GamePhase, Session};
use crate::tuning::Tuning;

/// Difficulty multiplier for a score: steps up every `score_per_speed_step`
/// points and is capped at `max_speed_multiplier`
pub fn speed_multiplier_for_score(score: u32, tuning: &Tuning) -> f32 {
    let steps = score / tuning.score_per_speed_step.max(1);
    (1.0 + steps as f32 * tuning.speed_increase_per_step).min(tuning.max_speed_multiplier)
}

/// Advance the session by one fixed timestep.
///
/// Does nothing once the run is over. Returns what happened this tick.
pub fn tick(session: &mut Session) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if session.phase != GamePhase::Playing {
        return events;
    }

    session.time_ticks += 1;
    session.bird.update();

    // Difficulty comes from the score as it stood before this tick's passes
    let multiplier = speed_multiplier_for_score(session.score, &session.tuning);
    if multiplier > session.speed_multiplier {
        log::info!("Speed up: x{:.1} at score {}", multiplier, session.score);
        events.push(GameEvent::SpeedUp { multiplier });
    }
    session.speed_multiplier = multiplier;

    let speed = session.current_speed();
    session.pipes.advance(speed);
    for slot in session.pipes.recycle_off_screen() {
        events.push(GameEvent::PipeRecycled { slot });
    }

    let passed = session.pipes.check_score(&session.bird);
    for _ in 0..passed {
        session.score += 1;
        log::debug!("Scored: {}", session.score);
        events.push(GameEvent::Scored {
            score: session.score,
        });
    }
    session.best_score = session.best_score.max(session.score);

    if let Some(cause) = death_cause(session) {
        session.phase = GamePhase::GameOver;
        log::info!(
            "Game over ({:?}) with score {} after {} ticks",
            cause,
            session.score,
            session.time_ticks
        );
        events.push(GameEvent::GameOver {
            cause,
            score: session.score,
        });
    }

    log::trace!(
        "tick {} y={:.1} v={:.1} speed={:.1}",
        session.time_ticks,
        session.bird.pos.y,
        session.bird.velocity,
        speed
    );

    events
}

fn death_cause(session: &Session) -> Option<DeathCause> {
    if session.pipes.check_collision(&session.bird) {
        Some(DeathCause::Pipe)
    } else if session.bird.pos.y < 0.0 {
        Some(DeathCause::Ceiling)
    } else if session.bird.pos.y > session.screen.y {
        Some(DeathCause::Floor)
    } else {
        None
    }
}
