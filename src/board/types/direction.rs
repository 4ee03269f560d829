//! Ray primitives shared by move and capture generation.

use std::iter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// A step vector repeated at most `max_steps` times.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
    pub max_steps: u32,
}

impl Direction {
    #[inline]
    #[must_use]
    pub const fn new(dx: i32, dy: i32, max_steps: u32) -> Self {
        Direction { dx, dy, max_steps }
    }

    /// A single step in `(dx, dy)`.
    #[inline]
    #[must_use]
    pub const fn step(dx: i32, dy: i32) -> Self {
        Direction::new(dx, dy, 1)
    }

    /// An unbounded ray; the board edge or the first occupied cell ends it.
    #[inline]
    #[must_use]
    pub const fn sliding(dx: i32, dy: i32) -> Self {
        Direction::new(dx, dy, u32::MAX)
    }

    /// A zero vector or a zero step limit never reaches any cell.
    #[inline]
    #[must_use]
    pub const fn is_degenerate(self) -> bool {
        (self.dx == 0 && self.dy == 0) || self.max_steps == 0
    }

    /// The cell one step past `at`, or `None` if the step overflows `i32`.
    #[inline]
    #[must_use]
    pub const fn advance(self, at: Coord) -> Option<Coord> {
        at.checked_offset(self.dx, self.dy)
    }

    /// Cells visited from `from` (exclusive), nearest first.
    ///
    /// The iterator is bounded by `max_steps` and ends early if a step would
    /// overflow; callers stop at the board edge.
    pub fn ray(self, from: Coord) -> impl Iterator<Item = Coord> {
        iter::successors(Some(from), move |&at| self.advance(at))
            .skip(1)
            .take(self.max_steps as usize)
    }

    /// Build a set of directions sharing one step limit.
    #[must_use]
    pub fn set(vectors: &[(i32, i32)], max_steps: u32) -> Vec<Direction> {
        vectors
            .iter()
            .map(|&(dx, dy)| Direction::new(dx, dy, max_steps))
            .collect()
    }
}

pub const DIAGONALS: [(i32, i32); 4] = [(-1, 1), (1, 1), (-1, -1), (1, -1)];

pub const ORTHOGONALS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const KNIGHT_JUMPS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
