//! Gapwing entry point
//!
//! The rendering front-end drives the sim through `gapwing::sim::tick`;
//! this binary runs a short scripted headless session as a smoke harness
//! and logs the outcome.

use std::time::{SystemTime, UNIX_EPOCH};

use gapwing::persistence::LeaderboardStore;
use gapwing::settings::Settings;
use gapwing::sim::{GamePhase, GameState, TickInput, tick};

fn main() {
    env_logger::init();
    log::info!("gapwing (headless) starting...");

    let mut settings = Settings::default();
    let store = LeaderboardStore::new();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(seed, &settings, store);
    log::info!("session seed: {seed}");

    // Start a run and flap on a fixed cadence until it ends
    let start = TickInput {
        start: true,
        ..Default::default()
    };
    tick(&mut state, &start, &mut settings);

    let mut ticks: u32 = 0;
    while state.phase != GamePhase::Over && ticks < 20_000 {
        let input = TickInput {
            jump_held: ticks % 40 == 0,
            ..Default::default()
        };
        tick(&mut state, &input, &mut settings);
        ticks += 1;
    }

    log::info!(
        "session ended after {ticks} ticks: phase {:?}, score {}, high score {}",
        state.phase,
        state.scoring.score,
        state.scoring.high_score
    );
}
