//! The stack of platforms built over a session
//!
//! Level 0 is the base, `height() - 1` the current play surface. Stored
//! platforms are only ever touched through level indices.

use serde::{Deserialize, Serialize};

use super::platform::Platform;
use super::side::Side;
use crate::error::SimError;

/// Append-only platform stack, never empty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tower {
    platforms: Vec<Platform>,
}

impl Tower {
    /// Create a tower standing on the given base platform
    pub fn new(base: Platform) -> Self {
        Self {
            platforms: vec![base],
        }
    }

    /// Put a new platform on top of the tower
    pub fn add(&mut self, platform: Platform) {
        self.platforms.push(platform);
    }

    /// Number of levels
    #[inline]
    pub fn height(&self) -> usize {
        self.platforms.len()
    }

    /// Index of the top level
    #[inline]
    pub fn top_level(&self) -> usize {
        self.platforms.len() - 1
    }

    /// The current play surface
    pub fn top(&self) -> &Platform {
        &self.platforms[self.top_level()]
    }

    /// The platform at the given level (0 = base)
    pub fn get(&self, level: usize) -> Result<&Platform, SimError> {
        let height = self.height();
        self.platforms
            .get(level)
            .ok_or(SimError::LevelOutOfRange { level, height })
    }

    /// All platforms, base first
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// First level below the top whose border on `side` differs from the top's
    pub fn edge_level(&self, side: Side) -> Option<usize> {
        self.scan_edge(side, self.top_level())
    }

    /// First level below `level` whose border on `side` differs from `level`'s
    pub fn edge_level_from(&self, side: Side, level: usize) -> Result<Option<usize>, SimError> {
        self.get(level)?;
        Ok(self.scan_edge(side, level))
    }

    fn scan_edge(&self, side: Side, level: usize) -> Option<usize> {
        let reference = self.platforms[level].position(side);
        self.platforms[..level]
            .iter()
            .rposition(|p| p.position(side) != reference)
    }

    /// Move the border of a stored platform by `delta`
    pub fn widen(&mut self, level: usize, side: Side, delta: f32) -> Result<(), SimError> {
        self.platform_mut(level)?.inc_position(side, delta);
        Ok(())
    }

    /// Set the border of a stored platform
    pub fn set_border(&mut self, level: usize, side: Side, position: f32) -> Result<(), SimError> {
        self.platform_mut(level)?.set_position(side, position);
        Ok(())
    }

    fn platform_mut(&mut self, level: usize) -> Result<&mut Platform, SimError> {
        let height = self.height();
        self.platforms
            .get_mut(level)
            .ok_or(SimError::LevelOutOfRange { level, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Platform {
        Platform::new(-3.0, 3.0, -3.0, 3.0)
    }

    #[test]
    fn test_add_and_top() {
        let mut tower = Tower::new(base());
        assert_eq!(tower.height(), 1);
        assert_eq!(*tower.top(), base());

        let next = Platform::new(-3.0, 3.0, -3.0, 1.0);
        tower.add(next);
        assert_eq!(tower.height(), 2);
        assert_eq!(*tower.top(), next);
        assert_eq!(*tower.get(0).unwrap(), base());
    }

    #[test]
    fn test_get_out_of_range() {
        let tower = Tower::new(base());
        assert_eq!(
            tower.get(1),
            Err(SimError::LevelOutOfRange {
                level: 1,
                height: 1
            })
        );
    }

    #[test]
    fn test_edge_level_uniform_tower() {
        let mut tower = Tower::new(base());
        tower.add(base());
        tower.add(base());
        for side in Side::ALL {
            assert_eq!(tower.edge_level(side), None);
        }
    }

    #[test]
    fn test_edge_level_finds_nearest_step() {
        let mut tower = Tower::new(base());
        tower.add(Platform::new(-3.0, 3.0, -3.0, 2.0));
        tower.add(Platform::new(-3.0, 1.0, -3.0, 2.0));
        tower.add(Platform::new(-3.0, 1.0, -3.0, 2.0));

        assert_eq!(tower.edge_level(Side::Right), Some(1));
        assert_eq!(tower.edge_level(Side::Back), Some(0));
        assert_eq!(tower.edge_level(Side::Left), None);

        assert_eq!(tower.edge_level_from(Side::Right, 1), Ok(None));
        assert_eq!(tower.edge_level_from(Side::Back, 1), Ok(Some(0)));
        assert!(tower.edge_level_from(Side::Back, 4).is_err());
    }

    #[test]
    fn test_widen_by_level() {
        let mut tower = Tower::new(base());
        tower.add(Platform::new(-3.0, 3.0, -3.0, 1.0));
        tower.widen(1, Side::Back, 0.5).unwrap();
        assert_eq!(tower.get(1).unwrap().y2, 1.5);
        tower.set_border(0, Side::Left, -4.0).unwrap();
        assert_eq!(tower.get(0).unwrap().x1, -4.0);
        assert!(tower.widen(2, Side::Back, 1.0).is_err());
    }
}
