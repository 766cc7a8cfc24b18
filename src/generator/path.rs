/*
path.rs

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

//! Path hidden in the grid.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::grid::Grid;

/// Path object.
///
/// Serialized as the ordered list of its cells.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(from = "Vec<usize>", into = "Vec<usize>")]
pub struct Path {
    /// Path as an ordered list of cell linear indexes.
    path: Vec<usize>,

    /// Cells in the path.
    /// Instead of looking for the cell in the [`Path::path`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    visited: HashSet<usize>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl From<Vec<usize>> for Path {
    fn from(path: Vec<usize>) -> Self {
        let visited: HashSet<usize> = path.iter().copied().collect();
        Self { path, visited }
    }
}

impl From<Path> for Vec<usize> {
    fn from(path: Path) -> Self {
        path.path
    }
}

impl Path {
    /// Create a [`Path`] object.
    pub fn new(length: usize) -> Self {
        Self {
            path: Vec::with_capacity(length),
            visited: HashSet::with_capacity(length),
        }
    }

    /// Create a [`Path`] object from a list of cells.
    pub fn from_cells(cells: &[usize]) -> Self {
        Self::from(cells.to_vec())
    }

    /// Remove all the cells from the path.
    pub fn clear(&mut self) {
        self.path.clear();
        self.visited.clear();
    }

    /// Add a cell to the path.
    pub fn push(&mut self, cell: usize) {
        self.path.push(cell);
        self.visited.insert(cell);
    }

    /// Get the number of cells in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the cell is in the path or not.
    pub fn contains(&self, cell: usize) -> bool {
        self.visited.contains(&cell)
    }

    /// Return a reference to the path cells.
    pub fn get(&self) -> &[usize] {
        &self.path
    }

    /// Return the cell at the given step (starting at 0).
    pub fn cell(&self, step: usize) -> Option<usize> {
        self.path.get(step).copied()
    }

    /// Return the position of the given cell in the path. Add one to the return value to get
    /// the step order stored in the grid.
    pub fn cell_index(&self, cell: usize) -> Option<usize> {
        self.path.iter().position(|c| *c == cell)
    }

    /// Return the first cell in the path (the head).
    pub fn first(&self) -> Option<usize> {
        self.path.first().copied()
    }

    /// Return the last cell in the path.
    pub fn last(&self) -> Option<usize> {
        self.path.last().copied()
    }

    /// Verify that the path is a self-avoiding walk inside the grid.
    ///
    /// # Errors
    ///
    /// Return a message describing the first broken rule.
    pub fn check(&self, grid: &Grid) -> Result<(), String> {
        if self.visited.len() != self.path.len() {
            return Err("the path goes through the same cell twice".to_string());
        }
        if let Some(c) = self.path.iter().find(|c| !grid.contains(**c)) {
            return Err(format!(
                "cell {c} is outside the {}x{} grid",
                grid.width(),
                grid.height()
            ));
        }
        if let Some(w) = self
            .path
            .windows(2)
            .find(|w| !grid.is_adjacent(w[0], w[1]))
        {
            return Err(format!("cells {} and {} are not adjacent", w[0], w[1]));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_lookup() {
        let mut path = Path::new(3);
        path.push(4);
        path.push(5);
        path.push(8);
        assert_eq!(path.len(), 3);
        assert!(path.contains(5));
        assert!(!path.contains(7));
        assert_eq!(path.first(), Some(4));
        assert_eq!(path.last(), Some(8));
        assert_eq!(path.cell(1), Some(5));
        assert_eq!(path.cell_index(8), Some(2));

        path.clear();
        assert!(path.is_empty());
        assert!(!path.contains(4));
    }

    #[test]
    fn check_rejects_broken_walks() {
        let grid = Grid::new(4, 4);
        assert!(Path::from_cells(&[0, 1, 5, 6, 10]).check(&grid).is_ok());
        assert!(Path::from_cells(&[0, 1, 0]).check(&grid).is_err());
        assert!(Path::from_cells(&[0, 2]).check(&grid).is_err());
        assert!(Path::from_cells(&[3, 4]).check(&grid).is_err());
        assert!(Path::from_cells(&[15, 16]).check(&grid).is_err());
    }

    #[test]
    fn serialized_as_list() {
        let path = Path::from_cells(&[2, 3, 7]);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "[2,3,7]");
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
        assert!(back.contains(7));
    }
}
