//! Simulation tuning
//!
//! Every constant the host and the core must agree on. Loaded from JSON when
//! the host supplies a file; missing fields fall back to [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;
use crate::sim::Platform;

/// Data-driven simulation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Geometry ===
    /// Vertical thickness of one platform level
    pub box_depth: f32,
    /// Half the side length of the square base platform
    pub initial_half_extent: f32,
    /// Offsets smaller than this snap to a perfect drop
    pub min_fragment: f32,

    // === Sliding block ===
    /// Milliseconds for one full back-and-forth trip
    pub period_ms: f64,
    /// Peak travel from the spawn point
    pub sweep_amplitude: f32,
    /// Distance of the spawn point from the top platform's center
    pub spawn_distance: f32,

    // === Falling fragments ===
    /// Units per millisecond²
    pub fragment_acceleration: f32,
    /// Depth below the base at which fragments vanish
    pub void_depth: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            box_depth: BOX_DEPTH,
            initial_half_extent: INITIAL_HALF_EXTENT,
            min_fragment: MIN_FRAGMENT,

            period_ms: PERIOD_MS,
            sweep_amplitude: SWEEP_AMPLITUDE,
            spawn_distance: SPAWN_DISTANCE,

            fragment_acceleration: FRAGMENT_ACCELERATION,
            void_depth: VOID_DEPTH,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("box_depth", self.box_depth as f64),
            ("initial_half_extent", self.initial_half_extent as f64),
            ("min_fragment", self.min_fragment as f64),
            ("period_ms", self.period_ms),
            ("sweep_amplitude", self.sweep_amplitude as f64),
            ("fragment_acceleration", self.fragment_acceleration as f64),
            ("void_depth", self.void_depth as f64),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::Invalid { field, value });
            }
        }

        if !(self.spawn_distance.is_finite() && self.spawn_distance >= 0.0) {
            return Err(TuningError::Invalid {
                field: "spawn_distance",
                value: self.spawn_distance as f64,
            });
        }

        Ok(())
    }

    /// The square base platform centered on the origin
    pub fn base_platform(&self) -> Platform {
        let h = self.initial_half_extent;
        Platform::new(-h, h, -h, h)
    }
}
