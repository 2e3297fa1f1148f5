//! Game state and render snapshots
//!
//! Everything a session needs lives in [`GameState`]; the host threads it
//! through [`super::tick`] and [`super::drop_block`].

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::fragment::Fragment;
use super::platform::Platform;
use super::side::{Direction, Side};
use super::slider::SlidingBlock;
use super::tower::Tower;
use crate::level_z;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Block sliding, waiting for the player
    Playing,
    /// Overhang consumed the platform; simulation frozen
    GameOver,
}

/// Notable things that happened since the host last drained events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PlatformPlaced { level: usize, perfect: bool },
    FragmentSpawned { side: Side, size: f32 },
    /// A live fragment was replaced by a newer one
    FragmentDiscarded,
    FragmentLanded { level: usize, piece: Platform },
    FragmentSplit { level: usize, piece: Platform },
    FragmentLost,
    GameOver { height: usize },
}

/// Running session statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Platforms placed
    pub score: u32,
    pub perfect_streak: u32,
    pub best_streak: u32,
    pub fragments_lost: u32,
}

impl Stats {
    pub fn record_drop(&mut self, perfect: bool) {
        self.score += 1;
        if perfect {
            self.perfect_streak += 1;
            self.best_streak = self.best_streak.max(self.perfect_streak);
        } else {
            self.perfect_streak = 0;
        }
    }
}

/// Host timestamps
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Clock {
    /// Latest tick timestamp (ms), `None` before the first tick
    pub now_ms: Option<f64>,
    /// When the current round's sweep started
    pub round_start_ms: f64,
}

impl Clock {
    pub fn now(&self) -> f64 {
        self.now_ms.unwrap_or(self.round_start_ms)
    }

    /// Time into the current round
    pub fn round_elapsed(&self) -> f64 {
        (self.now() - self.round_start_ms).max(0.0)
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub tower: Tower,
    pub direction: Direction,
    pub slider: SlidingBlock,
    /// At most one fragment in the air
    pub fragment: Option<Fragment>,
    pub phase: GamePhase,
    pub clock: Clock,
    pub stats: Stats,
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Start a session on the tuning's base platform
    pub fn new(tuning: Tuning) -> Self {
        let tower = Tower::new(tuning.base_platform());
        let direction = Direction::default();
        let slider = SlidingBlock::spawn(tower.top(), direction, &tuning);
        Self {
            tuning,
            tower,
            direction,
            slider,
            fragment: None,
            phase: GamePhase::Playing,
            clock: Clock::default(),
            stats: Stats::default(),
            events: Vec::new(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Take all events queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Geometry for the host to render
    pub fn frame(&self) -> Frame {
        let depth = self.tuning.box_depth;
        let platforms = self
            .tower
            .platforms()
            .iter()
            .enumerate()
            .map(|(level, p)| BoxGeometry::from_platform(p, level_z(level, depth), depth))
            .collect();

        Frame {
            phase: self.phase,
            score: self.stats.score,
            slider: BoxGeometry::from_platform(
                &self.slider.footprint(),
                level_z(self.tower.height(), depth),
                depth,
            ),
            fragment: self
                .fragment
                .as_ref()
                .map(|f| BoxGeometry::from_platform(&f.footprint, f.z, depth)),
            platforms,
        }
    }
}

/// Center and size of one box, enough to build a mesh
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxGeometry {
    pub center: Vec3,
    pub size: Vec3,
}

impl BoxGeometry {
    pub fn from_platform(platform: &Platform, z: f32, depth: f32) -> Self {
        let c = platform.center();
        Self {
            center: Vec3::new(c.x, c.y, z),
            size: Vec3::new(platform.width(), platform.height(), depth),
        }
    }
}

/// Snapshot of everything visible
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub phase: GamePhase,
    pub score: u32,
    pub slider: BoxGeometry,
    pub fragment: Option<BoxGeometry>,
    /// Base first
    pub platforms: Vec<BoxGeometry>,
}
