//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes only from host timestamps
//! - Seeded RNG only (autopilot)
//! - Stored platforms are mutated through the tower by level index
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod fragment;
pub mod platform;
pub mod side;
pub mod slider;
pub mod state;
pub mod tick;
pub mod tower;

pub use autopilot::Autopilot;
pub use fragment::{FallStep, FallTarget, Fragment};
pub use platform::Platform;
pub use side::{Direction, Side};
pub use slider::{SlidingBlock, triangle_wave};
pub use state::{BoxGeometry, Clock, Frame, GameEvent, GamePhase, GameState, Stats};
pub use tick::{DropOutcome, drop_block, tick};
pub use tower::Tower;
