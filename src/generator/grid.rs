/*
grid.rs

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

//! Playing field.
//!
//! The [`Grid`] object is a fixed-size buffer that stores, for each cell, its step order in the
//! path that goes through it.
//! A value of `0` means that no path goes through the cell.
//! Otherwise the value is the 1-based position of the cell in its path.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::coordinate::{Coordinate, Direction};
use super::path::Path;

/// Playing field of `width` x `height` cells.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,

    /// Step order of each cell, indexed by the cell linear index.
    cells: Vec<usize>,
}

impl Grid {
    /// Create an empty [`Grid`] object.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Return the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Return the step order of all the cells.
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Return the step order of a cell, or None if the index is outside the grid.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.cells.get(index).copied()
    }

    /// Whether the linear index designates a cell of the grid.
    pub fn contains(&self, index: usize) -> bool {
        index < self.cells.len()
    }

    /// Return the coordinate of a cell, or None if the index is outside the grid.
    pub fn coordinate(&self, index: usize) -> Option<Coordinate> {
        if self.contains(index) {
            Some(Coordinate::from_index(index, self.width))
        } else {
            None
        }
    }

    /// Return the linear index of a coordinate, or None if the coordinate is outside the grid.
    pub fn index(&self, coordinate: Coordinate) -> Option<usize> {
        if coordinate.x < self.width && coordinate.y < self.height {
            Some(coordinate.to_index(self.width))
        } else {
            None
        }
    }

    /// Return the cell next to the given one in the given direction.
    ///
    /// The rendering layer uses this method to move the keyboard focus.
    pub fn neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        let c: Coordinate = self.coordinate(index)?;
        c.step(direction, self.width, self.height)
            .map(|n| n.to_index(self.width))
    }

    /// Whether the two cells share an edge.
    pub fn is_adjacent(&self, index1: usize, index2: usize) -> bool {
        match (self.coordinate(index1), self.coordinate(index2)) {
            (Some(c1), Some(c2)) => c1.is_adjacent(&c2),
            _ => false,
        }
    }

    /// Write the step order of each cell of the path into the grid.
    ///
    /// A cell already written by another path is overwritten (last writer wins).
    pub fn bake(&mut self, path: &Path) {
        for (i, cell) in path.get().iter().enumerate() {
            match self.cells.get_mut(*cell) {
                Some(value) => {
                    if *value != 0 {
                        warn!("Cell {cell} already belongs to a path: order {value} replaced");
                    }
                    *value = i + 1;
                }
                None => warn!("Cell {cell} is outside the {}x{} grid", self.width, self.height),
            }
        }
    }
}

/// One row per line, each value right-aligned in three columns.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            for value in row {
                write!(f, "{:>3}", format!("{value} "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
