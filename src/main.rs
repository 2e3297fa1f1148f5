//! Tower Stack entry point
//!
//! Headless demo: the autopilot plays one session at 60 fps and the final
//! frame is printed as JSON.
//!
//! Usage: `tower-stack [tuning.json] [seed]`

use tower_stack::Tuning;
use tower_stack::sim::{Autopilot, DropOutcome, GameEvent, GameState, drop_block, tick};

/// Simulated frame length (60 fps)
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Stop after ten simulated minutes
const MAX_FRAMES: u32 = 60 * 60 * 10;
/// Autopilot timing error
const JITTER_MS: f64 = 120.0;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Tower Stack (headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0x5eed_u64);
    log::info!("Game initialized with seed: {}", seed);

    let mut state = GameState::new(tuning);
    let mut pilot = Autopilot::new(seed, JITTER_MS);

    for frame in 0..MAX_FRAMES {
        if let Err(e) = tick(&mut state, frame as f64 * FRAME_MS) {
            log::error!("Simulation error: {}", e);
            std::process::exit(1);
        }

        if pilot.wants_drop(&state) && drop_block(&mut state) == DropOutcome::GameOver {
            break;
        }

        for event in state.drain_events() {
            match event {
                GameEvent::PlatformPlaced { level, perfect: true } => {
                    log::info!("Perfect drop at level {}", level);
                }
                GameEvent::FragmentSplit { level, .. } => {
                    log::info!("Fragment split at level {}", level);
                }
                other => log::trace!("{:?}", other),
            }
        }
    }

    let stats = &state.stats;
    println!(
        "score {} | height {} | best perfect streak {} | fragments lost {}",
        stats.score,
        state.tower.height(),
        stats.best_streak,
        stats.fragments_lost
    );

    match serde_json::to_string_pretty(&state.frame()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize frame: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The core is embedded by a web host; there is no headless demo on wasm
}
