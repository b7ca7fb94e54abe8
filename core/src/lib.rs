#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core vocabulary shared across the Grid Pursuit simulator.
//!
//! This crate defines the coordinate and orientation types that the
//! authoritative world mutates. Positions are signed so that the enemy
//! marker may sit outside the playable area and so candidate moves may
//! cross an axis before the world clamps them back in bounds; the closed
//! [`Facing`] enumeration keeps the turn cycle enforced at the type level
//! instead of relying on modular integer arithmetic.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cardinal orientation controlling the direction of the next forward move.
///
/// Variants are ordered along the counter-clockwise turn cycle
/// Right → Up → Left → Down → Right. Turning left walks the cycle forward
/// and turning right walks it backward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    /// Movement toward increasing x coordinates.
    Right,
    /// Movement toward increasing y coordinates.
    Up,
    /// Movement toward decreasing x coordinates.
    Left,
    /// Movement toward decreasing y coordinates.
    Down,
}

impl Facing {
    /// Cyclic successor reached by a single 90-degree left turn.
    #[must_use]
    pub const fn turned_left(self) -> Self {
        match self {
            Self::Right => Self::Up,
            Self::Up => Self::Left,
            Self::Left => Self::Down,
            Self::Down => Self::Right,
        }
    }

    /// Cyclic predecessor reached by a single 90-degree right turn.
    ///
    /// Inverse of [`Facing::turned_left`] from every variant.
    #[must_use]
    pub const fn turned_right(self) -> Self {
        match self {
            Self::Right => Self::Down,
            Self::Up => Self::Right,
            Self::Left => Self::Up,
            Self::Down => Self::Left,
        }
    }

    /// Offset one forward move applies to a position in this orientation.
    #[must_use]
    pub const fn unit_step(self) -> (i32, i32) {
        match self {
            Self::Right => (1, 0),
            Self::Up => (0, 1),
            Self::Left => (-1, 0),
            Self::Down => (0, -1),
        }
    }
}

/// Location expressed as signed x and y coordinates.
///
/// A position is not bound to any particular grid; the world clamps agent
/// positions on assignment, while enemy markers keep whatever coordinates
/// they were constructed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    x: i32,
    y: i32,
}

impl GridPos {
    /// Creates a new position from explicit coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate of the position.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical coordinate of the position.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Returns the position shifted by the provided per-axis offsets.
    ///
    /// Saturates at the numeric bounds so a move at the edge of the
    /// representable range cannot wrap around.
    #[must_use]
    pub const fn offset_by(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Computes the Manhattan distance between two positions.
    #[must_use]
    pub fn manhattan_distance(self, other: GridPos) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl TryFrom<&[i32]> for GridPos {
    type Error = PositionError;

    /// Accepts exactly two coordinates; any other length is rejected.
    fn try_from(raw: &[i32]) -> Result<Self, Self::Error> {
        match raw {
            [x, y] => Ok(Self::new(*x, *y)),
            _ => Err(PositionError::InvalidPair { len: raw.len() }),
        }
    }
}

/// Playable dimensions of a grid measured in whole cells.
///
/// Both axes are guaranteed positive, so the clamp range
/// `[0, axis - 1]` is always non-empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    width: u32,
    height: u32,
}

impl GridSize {
    /// Creates a size descriptor, rejecting degenerate dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyAxis { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Constrains a position to the nearest in-bounds cell, per axis.
    ///
    /// Each coordinate independently becomes `max(0, min(coord, axis - 1))`.
    #[must_use]
    pub fn clamp(&self, pos: GridPos) -> GridPos {
        let x = i64::from(pos.x()).clamp(0, i64::from(self.width) - 1);
        let y = i64::from(pos.y()).clamp(0, i64::from(self.height) - 1);
        GridPos::new(x as i32, y as i32)
    }

    /// Reports whether the position already lies within the grid bounds.
    #[must_use]
    pub fn contains(&self, pos: GridPos) -> bool {
        self.clamp(pos) == pos
    }
}

/// Caller-chosen key identifying an entry in the position history.
///
/// History keys are supplied by the embedding application and carry no
/// relationship to the move counter kept by the stepped simulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StepIndex(u64);

impl StepIndex {
    /// Creates a new history key with the provided numeric value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the key.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

/// Error raised when raw position input is not a coordinate pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum PositionError {
    /// The provided value did not contain exactly two coordinates.
    #[error("position must be a pair of exactly two coordinates, got {len} elements")]
    InvalidPair {
        /// Number of elements in the rejected input.
        len: usize,
    },
}

/// Error raised when grid dimensions cannot form a valid clamp range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum GridError {
    /// At least one axis was zero, leaving no in-bounds coordinate.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyAxis {
        /// Requested number of columns.
        width: u32,
        /// Requested number of rows.
        height: u32,
    },
}
