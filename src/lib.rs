//! Tower Stack - A tower-stacking arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (platforms, tower, falling fragments, game state)
//! - `tuning`: Data-driven simulation constants
//! - `error`: Error types
//!
//! Rendering, input wiring and scheduling live in the host. The host feeds
//! timestamps to [`sim::tick`], forwards player actions to [`sim::drop_block`]
//! and draws [`sim::Frame`] snapshots.

pub mod error;
pub mod sim;
pub mod tuning;

pub use error::{SimError, TuningError};
pub use tuning::Tuning;

/// Default simulation constants
pub mod consts {
    /// Vertical thickness of one platform level
    pub const BOX_DEPTH: f32 = 0.5;
    /// Half the side length of the square base platform
    pub const INITIAL_HALF_EXTENT: f32 = 3.0;
    /// Offsets below this are perfect drops
    pub const MIN_FRAGMENT: f32 = 0.1;

    /// Milliseconds for one trip of the sliding block back and forth
    pub const PERIOD_MS: f64 = 5000.0;
    /// Peak travel of the sliding block from its spawn point
    pub const SWEEP_AMPLITUDE: f32 = 13.0;
    /// Distance of the spawn point from the top platform's center
    pub const SPAWN_DISTANCE: f32 = 10.0;

    /// Fragment acceleration in units per millisecond²
    pub const FRAGMENT_ACCELERATION: f32 = 0.0001;
    /// Fragments below `-VOID_DEPTH` are discarded
    pub const VOID_DEPTH: f32 = 20.0;

    /// Remainders thinner than this after a landing are not propagated
    pub const LANDING_EPSILON: f32 = 1e-4;
}

/// World-space height of a level's box center
#[inline]
pub fn level_z(level: usize, box_depth: f32) -> f32 {
    level as f32 * box_depth
}
