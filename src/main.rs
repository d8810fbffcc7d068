//! Flappy headless host
//!
//! Drives the simulation the way a windowed host would (fixed-step clock fed by
//! 60 Hz frames, jump/restart inputs, snapshot reads) with an autopilot in
//! place of a player.

use std::path::PathBuf;

use clap::Parser;
use flappy::consts::{MAX_SUBSTEPS, SCREEN_HEIGHT, SCREEN_WIDTH, SIM_DT};
use flappy::sim::{GameEvent, Session, tick};
use flappy::{ConfigError, FixedStep, Tuning, TuningError};
use thiserror::Error;

/// Simulated display refresh
const FRAME_DT: f32 = 1.0 / 60.0;

#[derive(Debug, Error)]
enum HostError {
    #[error(transparent)]
    Tuning(#[from] TuningError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to encode snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "flappy")]
#[command(about = "Headless Flappy Bird runner driven by an autopilot")]
struct Options {
    /// Seed for the pipe gap RNG
    #[arg(long, default_value_t = 0x5EED)]
    seed: u64,

    /// Runs to play before exiting
    #[arg(long, default_value_t = 3)]
    runs: u32,

    /// Simulation tick budget across all runs
    #[arg(long, default_value_t = 20_000)]
    max_ticks: u64,

    /// JSON tuning file; missing fields keep their defaults
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Print the final render snapshot as JSON
    #[arg(long)]
    json: bool,
}

/// Flaps whenever the bird sinks below the middle of the next gap
struct Autopilot {
    /// How far below the gap center the bird may drop before flapping
    slack: f32,
}

impl Autopilot {
    fn wants_jump(&self, session: &Session) -> bool {
        let geom = session.pipes.geometry();
        let bird = &session.bird;
        let target = session
            .pipes
            .pairs()
            .iter()
            .filter(|p| p.left - geom.cap_overhang + geom.cap_width >= bird.pos.x)
            .min_by(|a, b| a.left.total_cmp(&b.left))
            .map(|p| p.gap_center_y)
            .unwrap_or(session.screen.y / 2.0);

        let center = bird.pos.y + bird.size / 2.0;
        bird.velocity >= 0.0 && center > target + self.slack
    }
}

fn run(opts: Options) -> Result<(), HostError> {
    let tuning = match &opts.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };

    let mut session = Session::new(tuning, SCREEN_WIDTH, SCREEN_HEIGHT, opts.seed)?;
    let mut clock = FixedStep::new(SIM_DT, MAX_SUBSTEPS)?;
    let pilot = Autopilot { slack: 20.0 };
    let mut scores: Vec<u32> = Vec::with_capacity(opts.runs as usize);
    let mut total_ticks = 0u64;

    while (scores.len() as u32) < opts.runs && total_ticks < opts.max_ticks {
        for _ in 0..clock.advance(FRAME_DT) {
            // A real host stops feeding ticks once the run is over
            if session.is_game_over() {
                break;
            }
            if pilot.wants_jump(&session) {
                session.handle_jump();
            }
            for event in tick(&mut session) {
                if let GameEvent::GameOver { cause, score } = event {
                    log::info!("Run {} ended: {:?}, score {}", scores.len() + 1, cause, score);
                    scores.push(score);
                }
            }
            total_ticks += 1;
        }

        if session.is_game_over() && (scores.len() as u32) < opts.runs {
            session.handle_restart();
            clock.reset();
        }
    }

    if !session.is_game_over() && total_ticks >= opts.max_ticks {
        log::info!(
            "Tick budget of {} used up mid-run at score {}",
            opts.max_ticks,
            session.score
        );
    }

    let best = scores.iter().copied().max().unwrap_or(0);
    println!("Runs: {:?}", scores);
    println!("Best: {}", best);
    println!("{}", session.snapshot().hud_text());

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Flappy (headless) starting...");

    let opts = Options::parse();
    if let Err(e) = run(opts) {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
