//! Seeded bot that plays the game
//!
//! Used by the headless demo and by tests that need long, reproducible
//! sessions. Aims for the moment the slider crosses the top platform's center
//! and misses by a random amount.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::GameState;

/// Decides when to trigger a drop
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    /// Maximum timing error in either direction (ms)
    pub jitter_ms: f64,
    /// Round start the current aim was picked for
    aimed_round: Option<f64>,
    /// Round-elapsed time to drop at
    aim_ms: f64,
}

impl Autopilot {
    pub fn new(seed: u64, jitter_ms: f64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            jitter_ms,
            aimed_round: None,
            aim_ms: 0.0,
        }
    }

    /// True once the aimed moment of the current round has passed
    pub fn wants_drop(&mut self, state: &GameState) -> bool {
        if state.is_over() || state.clock.now_ms.is_none() {
            return false;
        }

        let round = state.clock.round_start_ms;
        if self.aimed_round != Some(round) {
            self.aim_ms = self.pick_aim(state);
            self.aimed_round = Some(round);
        }

        state.clock.round_elapsed() >= self.aim_ms
    }

    fn pick_aim(&mut self, state: &GameState) -> f64 {
        let target = state.tower.top().center_on(state.direction.high_side());
        let ideal = state
            .slider
            .time_to_reach(target, &state.tuning)
            .unwrap_or(state.tuning.period_ms / 2.0);

        let jitter = if self.jitter_ms > 0.0 {
            self.rng.random_range(-self.jitter_ms..=self.jitter_ms)
        } else {
            0.0
        };
        let aim = (ideal + jitter).max(0.0);
        log::debug!("Autopilot aims at {:.1} ms (ideal {:.1})", aim, ideal);
        aim
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::LANDING_EPSILON;
    use crate::sim::{DropOutcome, GameEvent, Side, drop_block, tick};
    use crate::tuning::Tuning;

    /// Play until game over or `max_frames`, returning the final state
    fn play(seed: u64, jitter_ms: f64, max_frames: u32) -> GameState {
        let mut state = GameState::new(Tuning::default());
        let mut pilot = Autopilot::new(seed, jitter_ms);
        for frame in 0..max_frames {
            tick(&mut state, frame as f64 * 16.0).unwrap();
            if pilot.wants_drop(&state) && drop_block(&mut state) == DropOutcome::GameOver {
                break;
            }
        }
        state
    }

    #[test]
    fn test_steady_hand_keeps_stacking() {
        let state = play(1, 0.0, 3000);
        assert!(!state.is_over());
        assert!(state.tower.height() > 10);
        // Frame quantization only; widths stay large
        let top = state.tower.top();
        assert!(top.width() > 4.0 && top.height() > 4.0);
    }

    #[test]
    fn test_same_seed_same_session() {
        let a = play(42, 300.0, 4000);
        let b = play(42, 300.0, 4000);
        assert_eq!(a.tower.platforms(), b.tower.platforms());
        assert_eq!(a.stats, b.stats);
    }

    #[test]
    fn test_shaky_hand_eventually_loses() {
        let state = play(7, 1500.0, 200_000);
        assert!(state.is_over());
    }

    #[test]
    fn test_sessions_leave_no_micro_steps() {
        // Anything thinner is float noise, not a ledge
        let noise = LANDING_EPSILON / 2.0;

        for seed in 0..200 {
            let mut state = play(seed, 400.0, 3000);
            for pair in state.tower.platforms().windows(2) {
                for side in Side::ALL {
                    let step = (pair[0].position(side) - pair[1].position(side)).abs();
                    assert!(
                        step == 0.0 || step >= noise,
                        "seed {}: {:?} step of {:e} between {:?} and {:?}",
                        seed,
                        side,
                        step,
                        pair[0],
                        pair[1]
                    );
                }
            }
            for event in state.drain_events() {
                if let GameEvent::FragmentSplit { piece, .. } = event {
                    let thinnest = piece.width().min(piece.height());
                    assert!(thinnest >= noise, "seed {}: sliver split {:?}", seed, piece);
                }
            }
        }
    }

    #[test]
    fn test_no_drop_before_clock_starts() {
        let state = GameState::new(Tuning::default());
        let mut pilot = Autopilot::new(0, 0.0);
        assert!(!pilot.wants_drop(&state));
    }
}
