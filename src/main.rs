//! Dino Dash entry point
//!
//! Headless demo shell: runs the simulation at its nominal step rate with
//! the built-in autopilot and reports each run to the session leaderboard.
//! A renderer or audio frontend would consume the same state and events
//! this loop logs.

use std::env;
use std::error::Error;
use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use dino_dash::HighScores;
use dino_dash::Tuning;
use dino_dash::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Demo length caps
const DEMO_RUNS: u32 = 3;
const MAX_STEPS: u32 = 20_000;

fn main() {
    env_logger::init();

    let tuning = match env::args().nth(1) {
        Some(path) => match load_tuning(&path) {
            Ok(tuning) => {
                log::info!("loaded tuning overrides from {path}");
                tuning
            }
            Err(err) => {
                log::warn!("ignoring tuning file {path}: {err}");
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("starting demo session with seed {seed}");

    let mut state = GameState::with_tuning(seed, tuning);
    let mut scores = HighScores::new();
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    let mut runs = 0u32;
    for _ in 0..MAX_STEPS {
        let was_active = state.phase == GamePhase::Active;
        tick(&mut state, &input);

        for &event in &state.events {
            log::debug!("audio cue: {}", cue_name(event));
        }

        if was_active && state.phase == GamePhase::GameOver {
            runs += 1;
            let rank = scores.add_score(state.score, state.scroll_speed);
            log::info!(
                "run {runs} ended: score {}, speed {:.1}, rank {rank:?}",
                state.score,
                state.scroll_speed
            );
            if runs >= DEMO_RUNS {
                break;
            }
        }
    }

    println!("Demo session over (seed {seed})");
    println!("High score: {}", state.high_score);
    for (i, entry) in scores.entries.iter().enumerate() {
        println!(
            "  {:>2}. {:>6}  (top speed {:.1})",
            i + 1,
            entry.score,
            entry.top_speed
        );
    }
}

/// Map a simulation event to the audio cue an external frontend would play
fn cue_name(event: GameEvent) -> &'static str {
    match event {
        GameEvent::Jump => "jump",
        GameEvent::Collision => "collision",
        GameEvent::Milestone => "point",
    }
}

fn load_tuning(path: &str) -> Result<Tuning, Box<dyn Error>> {
    let json = fs::read_to_string(path)?;
    Ok(Tuning::from_json(&json)?)
}
