//! Dino Dash headless demo
//!
//! Drives the simulation core at a fixed timestep with a scripted player:
//! jump when the nearest obstacle closes in, hold float on the way down.
//! Events are logged as they fire and a JSON run summary is printed when
//! the run ends.
//!
//! Usage: `dino-dash [seed] [config.json]`

use std::env;
use std::fs;
use std::process::ExitCode;

use serde::Serialize;

use dino_dash::config::GameConfig;
use dino_dash::sim::{GameEvent, GameState, TickInput, tick};

/// Fixed demo timestep (120 Hz)
const DT: f32 = 1.0 / 120.0;
/// Hard cap so a clean run still terminates
const MAX_SECONDS: f32 = 120.0;
/// World distance ahead of the player at which the script jumps
const JUMP_LEAD: f32 = 9.0;

#[derive(Serialize)]
struct RunSummary {
    seed: u64,
    score: u64,
    seconds: f32,
    obstacles_seen: u32,
    collided: bool,
}

/// Jump when the nearest obstacle ahead is inside the lead window; float
/// while falling to stretch the hang time.
fn scripted_input(state: &GameState) -> TickInput {
    let nearest = state
        .ring
        .segments()
        .flat_map(|segment| {
            segment
                .obstacles
                .iter()
                .map(move |obstacle| segment.origin + obstacle.position)
        })
        .filter(|&y| y > 0.0)
        .fold(f32::INFINITY, f32::min);

    TickInput {
        jump: nearest < JUMP_LEAD,
        big_jump: false,
        float: state.player.jumping && state.player.velocity < 0.0,
        down: false,
    }
}

fn load_config(path: &str) -> Result<GameConfig, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args().skip(1);
    let seed = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xD1D0);
    let config = match args.next() {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("failed to load config {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };

    let mut state = match GameState::new(config, seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("session start, seed {seed}");

    let mut obstacles_seen = 0u32;
    let output = loop {
        let input = scripted_input(&state);
        let output = tick(&mut state, &input, DT);
        for event in state.take_events() {
            match event {
                GameEvent::Jump => log::debug!("jump"),
                GameEvent::BigJump => log::debug!("big jump"),
                GameEvent::ScoreMilestone { score } => log::info!("score {score}"),
                GameEvent::SegmentRecycled { segment } => {
                    log::debug!("segment {segment} recycled")
                }
                GameEvent::ObstaclePlaced { segment, position } => {
                    obstacles_seen += 1;
                    log::debug!("obstacle on segment {segment} at {position:.2}");
                }
                GameEvent::Collision => log::info!("collided at score {}", output.score),
            }
        }
        if output.collided || state.elapsed >= MAX_SECONDS {
            break output;
        }
    };

    let summary = RunSummary {
        seed,
        score: output.score,
        seconds: state.elapsed,
        obstacles_seen,
        collided: output.collided,
    };
    let json = serde_json::to_string(&summary).expect("run summary serializes");
    println!("{json}");
    ExitCode::SUCCESS
}
