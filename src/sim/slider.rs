//! The sliding block the player drops onto the tower

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::platform::Platform;
use super::side::Direction;
use crate::tuning::Tuning;

/// Triangle wave rising from 0 to `amplitude` and back over `period_ms`
pub fn triangle_wave(elapsed_ms: f64, period_ms: f64, amplitude: f32) -> f32 {
    // Fraction of the current cycle, in [0, 1)
    let n = (elapsed_ms / period_ms).rem_euclid(1.0) as f32;
    let d = 2.0 * amplitude * n;
    if d > amplitude { 2.0 * amplitude - d } else { d }
}

/// The block moving back and forth above the top platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlidingBlock {
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
    pub direction: Direction,
    /// Swept-axis coordinate at the start of each cycle
    anchor: f32,
}

impl SlidingBlock {
    /// Spawn a block matching `top`, placed off the tower on the swept axis
    pub fn spawn(top: &Platform, direction: Direction, tuning: &Tuning) -> Self {
        let center = top.center();
        let anchor = match direction {
            Direction::BackToFront => center.y - direction.travel_sign() * tuning.spawn_distance,
            Direction::LeftToRight => center.x - direction.travel_sign() * tuning.spawn_distance,
        };
        let mut block = Self {
            center,
            width: top.width(),
            height: top.height(),
            direction,
            anchor,
        };
        block.set_swept(anchor);
        block
    }

    /// Move the block to where it is `elapsed_ms` into the round
    pub fn update(&mut self, elapsed_ms: f64, tuning: &Tuning) {
        let d = triangle_wave(elapsed_ms, tuning.period_ms, tuning.sweep_amplitude);
        self.set_swept(self.anchor + self.direction.travel_sign() * d);
    }

    /// Coordinate on the swept axis
    pub fn swept(&self) -> f32 {
        match self.direction {
            Direction::BackToFront => self.center.y,
            Direction::LeftToRight => self.center.x,
        }
    }

    fn set_swept(&mut self, value: f32) {
        match self.direction {
            Direction::BackToFront => self.center.y = value,
            Direction::LeftToRight => self.center.x = value,
        }
    }

    /// Current horizontal footprint
    pub fn footprint(&self) -> Platform {
        Platform::from_center(self.center, self.width, self.height)
    }

    /// Elapsed round time at which the block first crosses `target` on the swept axis
    ///
    /// `None` if the sweep never reaches it.
    pub fn time_to_reach(&self, target: f32, tuning: &Tuning) -> Option<f64> {
        let distance = (target - self.anchor) * self.direction.travel_sign();
        if distance < 0.0 || distance > tuning.sweep_amplitude {
            return None;
        }
        let half_period = tuning.period_ms / 2.0;
        Some(distance as f64 / tuning.sweep_amplitude as f64 * half_period)
    }
}
