/*
coordinate.rs

Copyright 2025 Hervé Quatremain

This file is part of Walktrace.

Walktrace is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Walktrace is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Walktrace. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Grid coordinates and the four directions.
//!
//! Cells are addressed either by a [`Coordinate`] or by their linear index `y * width + x`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four grid directions.
///
/// The declaration order is the order in which neighbors are enumerated.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

/// All the directions, in neighbor enumeration order.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::Right,
    Direction::Left,
    Direction::Down,
    Direction::Up,
];

/// Position of a cell in the grid.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Coordinate {
    /// Create a [`Coordinate`] object.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Build the coordinate from a linear index.
    pub fn from_index(index: usize, width: usize) -> Self {
        Self {
            x: index % width,
            y: index / width,
        }
    }

    /// Return the linear index of the coordinate.
    pub fn to_index(&self, width: usize) -> usize {
        self.y * width + self.x
    }

    /// Return the coordinate one step away in the given direction, or None if the step leaves
    /// the `width` x `height` grid.
    pub fn step(&self, direction: Direction, width: usize, height: usize) -> Option<Self> {
        let c: Coordinate = match direction {
            Direction::Right => Self::new(self.x + 1, self.y),
            Direction::Left => Self::new(self.x.checked_sub(1)?, self.y),
            Direction::Down => Self::new(self.x, self.y + 1),
            Direction::Up => Self::new(self.x, self.y.checked_sub(1)?),
        };
        if c.x < width && c.y < height {
            Some(c)
        } else {
            None
        }
    }

    /// Whether the two coordinates share an edge.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_conversion() {
        let c = Coordinate::from_index(6, 4);
        assert_eq!(c, Coordinate::new(2, 1));
        assert_eq!(c.to_index(4), 6);
    }

    #[test]
    fn step_stays_in_bounds() {
        let corner = Coordinate::new(0, 0);
        assert_eq!(corner.step(Direction::Left, 3, 3), None);
        assert_eq!(corner.step(Direction::Up, 3, 3), None);
        assert_eq!(
            corner.step(Direction::Right, 3, 3),
            Some(Coordinate::new(1, 0))
        );
        assert_eq!(
            Coordinate::new(2, 2).step(Direction::Down, 3, 3),
            None,
            "bottom row has no cell below"
        );
    }

    #[test]
    fn adjacency() {
        let c = Coordinate::new(1, 1);
        assert!(c.is_adjacent(&Coordinate::new(1, 0)));
        assert!(c.is_adjacent(&Coordinate::new(2, 1)));
        assert!(!c.is_adjacent(&Coordinate::new(2, 2)));
        assert!(!c.is_adjacent(&c));
    }
}
