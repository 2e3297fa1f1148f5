//! Per-frame simulation step and the drop action
//!
//! The host calls [`tick`] once per rendered frame and [`drop_block`] when the
//! player acts. Both take the whole session so they can never overlap.

use super::fragment::{FallStep, FallTarget, Fragment};
use super::platform::Platform;
use super::slider::SlidingBlock;
use super::state::{GameEvent, GamePhase, GameState};
use crate::error::SimError;
use crate::level_z;

/// Result of a player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// A new platform was placed
    Continue { perfect: bool },
    /// The block missed the tower; the session is over
    GameOver,
}

/// Advance the simulation to the host timestamp `now_ms`
pub fn tick(state: &mut GameState, now_ms: f64) -> Result<(), SimError> {
    // Frozen on the last valid frame
    if state.phase == GamePhase::GameOver {
        return Ok(());
    }

    let (now_ms, dt_ms) = match state.clock.now_ms {
        None => {
            state.clock.round_start_ms = now_ms;
            log::info!("Session clock started at {:.1} ms", now_ms);
            (now_ms, 0.0)
        }
        Some(last) if now_ms < last => {
            log::warn!("Timestamp went backwards ({:.1} -> {:.1} ms)", last, now_ms);
            (last, 0.0)
        }
        Some(last) => (now_ms, now_ms - last),
    };
    state.clock.now_ms = Some(now_ms);

    let elapsed = state.clock.round_elapsed();
    state.slider.update(elapsed, &state.tuning);

    step_fragment(state, dt_ms as f32)
}

/// Move the falling fragment and settle it against the tower
fn step_fragment(state: &mut GameState, dt_ms: f32) -> Result<(), SimError> {
    let Some(fragment) = state.fragment.as_mut() else {
        return Ok(());
    };

    let tuning = &state.tuning;
    fragment.fall(dt_ms, tuning.fragment_acceleration);

    // A long frame may carry the fragment past several edges
    loop {
        match fragment.resolve(&mut state.tower, tuning.box_depth, tuning.void_depth)? {
            FallStep::Falling => return Ok(()),
            FallStep::Split { level, piece } => {
                log::debug!(
                    "Fragment split at level {}, {:.3} left falling",
                    level,
                    fragment.size().abs()
                );
                state.events.push(GameEvent::FragmentSplit { level, piece });
            }
            FallStep::Landed { level, piece } => {
                log::debug!("Fragment landed at level {}", level);
                state.fragment = None;
                state.events.push(GameEvent::FragmentLanded { level, piece });
                return Ok(());
            }
            FallStep::Void => {
                log::debug!("Fragment fell into the void");
                state.fragment = None;
                state.stats.fragments_lost += 1;
                state.events.push(GameEvent::FragmentLost);
                return Ok(());
            }
        }
    }
}

/// Drop the sliding block onto the tower
pub fn drop_block(state: &mut GameState) -> DropOutcome {
    if state.phase == GamePhase::GameOver {
        return DropOutcome::GameOver;
    }

    let top = *state.tower.top();
    let direction = state.direction;
    let (low, high) = (direction.low_side(), direction.high_side());
    let offset = state.slider.swept() - top.center_on(high);

    // Shift the top's own borders so the unswept axis matches it exactly
    let mut block = top;
    block.inc_position(low, offset);
    block.inc_position(high, offset);
    let mut survivor = top.intersect(&block);

    if survivor.is_degenerate() {
        state.phase = GamePhase::GameOver;
        let height = state.tower.height();
        log::info!("Game over at height {} (score {})", height, state.stats.score);
        state.events.push(GameEvent::GameOver { height });
        return DropOutcome::GameOver;
    }

    let perfect = offset.abs() < state.tuning.min_fragment;

    if perfect {
        survivor.set_position(low, top.position(low));
        survivor.set_position(high, top.position(high));
    } else {
        spawn_fragment(state, &survivor, offset);
    }

    state.tower.add(survivor);
    let level = state.tower.top_level();
    state.stats.record_drop(perfect);
    state.events.push(GameEvent::PlatformPlaced { level, perfect });
    log::debug!(
        "Placed level {} ({:.3} x {:.3}){}",
        level,
        survivor.width(),
        survivor.height(),
        if perfect { " perfect" } else { "" }
    );

    state.direction = direction.next();
    state.slider = SlidingBlock::spawn(&survivor, state.direction, &state.tuning);
    state.clock.round_start_ms = state.clock.now();

    DropOutcome::Continue { perfect }
}

/// Break the overhang off as a falling fragment
///
/// Must run before the survivor is pushed: the spawn height and edge lookup
/// are relative to the current top.
fn spawn_fragment(state: &mut GameState, survivor: &Platform, offset: f32) {
    let top = *state.tower.top();
    let side = state.direction.side_for(offset);

    let mut footprint = *survivor;
    let border = top.position(side);
    footprint.set_position(side.opposite(), border);
    footprint.set_position(side, border + offset);

    if state.fragment.take().is_some() {
        log::debug!("Discarding previous fragment");
        state.events.push(GameEvent::FragmentDiscarded);
    }

    let target = FallTarget::from_edge(state.tower.edge_level(side));
    log::debug!(
        "Fragment of {:.3} on {:?} side, target {:?}",
        offset.abs(),
        side,
        target
    );

    state.fragment = Some(Fragment {
        footprint,
        side,
        direction: state.direction,
        z: level_z(state.tower.height(), state.tuning.box_depth),
        velocity: 0.0,
        spawned_at_ms: state.clock.now(),
        target,
    });
    state.events.push(GameEvent::FragmentSpawned {
        side,
        size: offset.abs(),
    });
}
