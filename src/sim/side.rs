//! Platform sides and sweep directions

use serde::{Deserialize, Serialize};

/// One of the four horizontal borders of a platform
///
/// Front/Back bound the Y axis (`y1`/`y2`), Left/Right bound the X axis
/// (`x1`/`x2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Front,
    Back,
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Front, Side::Back, Side::Left, Side::Right];

    /// The border facing the other way on the same axis
    pub fn opposite(self) -> Side {
        match self {
            Side::Front => Side::Back,
            Side::Back => Side::Front,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// The sweep direction whose axis this side bounds
    pub fn direction(self) -> Direction {
        match self {
            Side::Front | Side::Back => Direction::BackToFront,
            Side::Left | Side::Right => Direction::LeftToRight,
        }
    }

    /// +1 if moving this border by a positive delta grows the footprint, -1 otherwise
    #[inline]
    pub fn outward_sign(self) -> f32 {
        match self {
            Side::Back | Side::Right => 1.0,
            Side::Front | Side::Left => -1.0,
        }
    }

    /// Whether moving this border by `delta` enlarges the footprint
    #[inline]
    pub fn is_outside(self, delta: f32) -> bool {
        delta * self.outward_sign() > 0.0
    }
}

/// The horizontal axis swept (and clipped) in the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Block moves along Y, from the back toward the front
    #[default]
    BackToFront,
    /// Block moves along X, from the left toward the right
    LeftToRight,
}

impl Direction {
    /// Direction of the following round
    pub fn next(self) -> Direction {
        match self {
            Direction::BackToFront => Direction::LeftToRight,
            Direction::LeftToRight => Direction::BackToFront,
        }
    }

    /// Border at the lower coordinate of the swept axis
    pub fn low_side(self) -> Side {
        match self {
            Direction::BackToFront => Side::Front,
            Direction::LeftToRight => Side::Left,
        }
    }

    /// Border at the upper coordinate of the swept axis
    pub fn high_side(self) -> Side {
        match self {
            Direction::BackToFront => Side::Back,
            Direction::LeftToRight => Side::Right,
        }
    }

    /// Side an overhang with the given signed offset sticks out on
    pub fn side_for(self, offset: f32) -> Side {
        if offset > 0.0 {
            self.high_side()
        } else {
            self.low_side()
        }
    }

    /// Sign of the block's travel along the swept axis
    pub fn travel_sign(self) -> f32 {
        match self {
            Direction::BackToFront => -1.0,
            Direction::LeftToRight => 1.0,
        }
    }
}
