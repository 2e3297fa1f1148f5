//! Falling fragment simulation
//!
//! A fragment drops beside the tower until it reaches the exposed edge of a
//! lower, wider level. If it fits on that edge it merges into the level
//! resting on it; if it sticks out further, the part that fits merges and the
//! rest keeps falling toward the next edge, or into the void.

use serde::{Deserialize, Serialize};

use super::platform::Platform;
use super::side::{Direction, Side};
use super::tower::Tower;
use crate::consts::LANDING_EPSILON;
use crate::error::SimError;
use crate::level_z;

/// Where a falling fragment will come to rest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FallTarget {
    /// Onto the exposed edge of this level (resting on it one level up)
    Edge(usize),
    /// Nothing below; falls until the void plane
    Void,
}

impl FallTarget {
    pub fn from_edge(edge: Option<usize>) -> Self {
        edge.map_or(FallTarget::Void, FallTarget::Edge)
    }
}

/// Result of resolving a fragment against the tower
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FallStep {
    /// Still in the air
    Falling,
    /// Fully merged into the platform at `level`
    Landed { level: usize, piece: Platform },
    /// `piece` merged into the platform at `level`, the rest keeps falling
    Split { level: usize, piece: Platform },
    /// Fell below the void plane
    Void,
}

/// The overhang broken off a dropped block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fragment {
    /// Horizontal extent
    pub footprint: Platform,
    /// Border of the tower the fragment hangs over
    pub side: Side,
    /// Sweep direction of the round that spawned it
    pub direction: Direction,
    /// Height of the box center
    pub z: f32,
    /// Downward speed (units per ms)
    pub velocity: f32,
    pub spawned_at_ms: f64,
    pub target: FallTarget,
}

impl Fragment {
    /// Signed size along the side's axis, positive when pointing outward
    pub fn size(&self) -> f32 {
        self.footprint.extent(self.side) * self.side.outward_sign()
    }

    /// Integrate one step of constant-acceleration fall
    pub fn fall(&mut self, dt_ms: f32, acceleration: f32) {
        self.velocity += acceleration * dt_ms;
        self.z -= self.velocity * dt_ms;
    }

    /// Check the fragment against its target, merging into the tower on landing
    pub fn resolve(
        &mut self,
        tower: &mut Tower,
        box_depth: f32,
        void_depth: f32,
    ) -> Result<FallStep, SimError> {
        let edge = match self.target {
            FallTarget::Void => {
                return Ok(if self.z < -void_depth {
                    FallStep::Void
                } else {
                    FallStep::Falling
                });
            }
            FallTarget::Edge(edge) => edge,
        };

        let level = edge + 1;
        let landing_z = level_z(level, box_depth);
        if self.z > landing_z {
            return Ok(FallStep::Falling);
        }

        let side = self.side;
        let edge_border = tower.get(edge)?.position(side);
        let border = tower.get(level)?.position(side);
        let landing = edge_border - border;
        let size = self.size();
        let remainder = size - landing;

        let flush = remainder.abs() < LANDING_EPSILON;
        if flush || !side.is_outside(remainder) {
            if flush {
                tower.set_border(level, side, edge_border)?;
            } else {
                tower.widen(level, side, size)?;
            }
            self.z = landing_z;
            return Ok(FallStep::Landed {
                level,
                piece: self.footprint,
            });
        }

        let (piece, rest) = self.split_at(edge_border);
        tower.set_border(level, side, edge_border)?;
        self.footprint = rest;
        self.target = FallTarget::from_edge(tower.edge_level_from(side, level)?);
        Ok(FallStep::Split { level, piece })
    }

    /// Cut the footprint at `border` on the fragment's axis: (inner, outer)
    pub fn split_at(&self, border: f32) -> (Platform, Platform) {
        let mut inner = self.footprint;
        let mut outer = self.footprint;
        inner.set_position(self.side, border);
        outer.set_position(self.side.opposite(), border);
        (inner, outer)
    }
}
