/*
random_path.rs

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

//! Generate random paths.
//!
//! A path is a self-avoiding random walk. Each attempt starts from a random cell and moves to a
//! random free neighbor until the path has the requested length. When the walk reaches a dead
//! end, the attempt is abandoned and a new one starts from another random cell.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashSet;
use std::error::Error;
use std::fmt;
use std::time::Instant;

use super::coordinate::{Coordinate, DIRECTIONS};
use super::path::Path;

/// Shortest path that can be generated.
pub const MIN_LENGTH: usize = 2;

/// Default fraction of the grid that a path can cover.
pub const FILL_FRACTION: f64 = 0.8;

/// Default number of attempts before giving up.
pub const MAX_ATTEMPTS: usize = 100_000;

/// Type of errors.
#[derive(Debug, Clone, PartialEq)]
pub enum RandomPathError {
    /// The requested length is not between [`MIN_LENGTH`] and the maximum length for the grid.
    InvalidLength { length: usize, max_length: usize },

    /// No path found before the maximum number of attempts.
    GenerationExhausted { attempts: usize },
}

impl fmt::Display for RandomPathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RandomPathError::InvalidLength { length, max_length } => write!(
                f,
                "path length ({length}) must be between {MIN_LENGTH} and {max_length} for this field"
            ),
            RandomPathError::GenerationExhausted { attempts } => {
                write!(f, "no path found after {attempts} attempts")
            }
        }
    }
}

impl Error for RandomPathError {}

/// A path and the effort it took to find it.
#[derive(Debug, Clone)]
pub struct GeneratedPath {
    pub path: Path,

    /// Number of random starts it took to generate the path.
    pub attempts: usize,

    /// Duration in seconds it took to generate the path.
    pub duration: f32,
}

/// [`RandomPath`] object.
#[derive(Debug, Clone)]
pub struct RandomPath {
    width: usize,
    height: usize,

    /// Fraction of the grid that a path can cover. Limits the path length.
    fill_fraction: f64,

    /// Number of attempts before [`RandomPathError::GenerationExhausted`] is returned.
    max_attempts: usize,
}

impl RandomPath {
    /// Create the object for a `width` x `height` grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            fill_fraction: FILL_FRACTION,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    /// Set the fraction of the grid that a path can cover.
    pub fn with_fill_fraction(mut self, fill_fraction: f64) -> Self {
        self.fill_fraction = fill_fraction;
        self
    }

    /// Set the number of attempts before giving up.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Return the longest path that can be requested for the grid.
    pub fn max_length(&self) -> usize {
        ((self.width * self.height) as f64 * self.fill_fraction).floor() as usize
    }

    /// Generate and return a random path, using the thread random number generator.
    ///
    /// See [`RandomPath::generate_with_rng`].
    pub fn generate(
        &self,
        length: usize,
        forbidden_cells: &HashSet<usize>,
        forbidden_heads: &HashSet<usize>,
    ) -> Result<GeneratedPath, RandomPathError> {
        self.generate_with_rng(&mut rand::rng(), length, forbidden_cells, forbidden_heads)
    }

    /// Generate and return a random path of `length` cells.
    ///
    /// The path never goes through a cell of `forbidden_cells` or `forbidden_heads`.
    ///
    /// # Errors
    ///
    /// The method returns an error if the length is not valid for the grid, or if no path is
    /// found after the maximum number of attempts.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
        forbidden_cells: &HashSet<usize>,
        forbidden_heads: &HashSet<usize>,
    ) -> Result<GeneratedPath, RandomPathError> {
        let max_length: usize = self.max_length();
        if !(MIN_LENGTH..=max_length).contains(&length) {
            return Err(RandomPathError::InvalidLength { length, max_length });
        }

        let start: Instant = Instant::now();
        let is_free =
            |cell: usize| !forbidden_cells.contains(&cell) && !forbidden_heads.contains(&cell);
        let free_cells: Vec<usize> = (0..self.width * self.height)
            .filter(|c| is_free(*c))
            .collect();
        debug!(
            "Length = {length}  Free cells = {}  Grid = {}x{}",
            free_cells.len(),
            self.width,
            self.height
        );
        // Not enough room left by the previous paths
        if free_cells.len() < length {
            return Err(RandomPathError::GenerationExhausted { attempts: 0 });
        }

        let mut path: Path = Path::new(length);
        let mut attempts: usize = 0;
        loop {
            if attempts >= self.max_attempts {
                debug!("Giving up after {attempts} attempts");
                return Err(RandomPathError::GenerationExhausted { attempts });
            }
            attempts += 1;
            if self.walk(rng, length, &free_cells, &is_free, &mut path) {
                break;
            }
        }

        let duration: f32 = start.elapsed().as_secs_f32();
        debug!(
            "Path generated in {attempts} tries ({duration}s): {:?}",
            path.get()
        );
        Ok(GeneratedPath {
            path,
            attempts,
            duration,
        })
    }

    /// Generate several paths, one for each length in `lengths`.
    ///
    /// A path never goes through a cell of the paths generated before it, nor starts on their
    /// heads.
    pub fn generate_many<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        lengths: &[usize],
    ) -> Result<Vec<GeneratedPath>, RandomPathError> {
        let mut forbidden_cells: HashSet<usize> = HashSet::new();
        let mut forbidden_heads: HashSet<usize> = HashSet::new();
        let mut paths: Vec<GeneratedPath> = Vec::with_capacity(lengths.len());

        for (i, length) in lengths.iter().enumerate() {
            debug!("Generating path {i}");
            let generated: GeneratedPath =
                self.generate_with_rng(rng, *length, &forbidden_cells, &forbidden_heads)?;
            forbidden_cells.extend(generated.path.get().iter().copied());
            if let Some(head) = generated.path.first() {
                forbidden_heads.insert(head);
            }
            paths.push(generated);
        }
        Ok(paths)
    }

    /// One attempt: grow a walk from a random free cell.
    ///
    /// Return `false` when the walk reaches a dead end before `length` cells.
    fn walk<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
        free_cells: &[usize],
        is_free: &impl Fn(usize) -> bool,
        path: &mut Path,
    ) -> bool {
        path.clear();
        let Some(&first) = free_cells.choose(rng) else {
            return false;
        };
        path.push(first);

        let mut current: usize = first;
        while path.len() < length {
            let coordinate: Coordinate = Coordinate::from_index(current, self.width);
            let candidates: Vec<usize> = DIRECTIONS
                .iter()
                .filter_map(|d| coordinate.step(*d, self.width, self.height))
                .map(|c| c.to_index(self.width))
                .filter(|c| is_free(*c) && !path.contains(*c))
                .collect();

            match candidates.choose(rng) {
                Some(&next) => {
                    path.push(next);
                    current = next;
                }
                // Dead end, no free neighbors left
                None => return false,
            }
        }
        true
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::generator::grid::Grid;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    proptest! {
        #[test]
        fn prop_paths_are_self_avoiding_walks(
            seed in any::<u64>(),
            width in 3usize..10,
            height in 3usize..10,
            fraction in 0.1f64..0.6,
        ) {
            let generator = RandomPath::new(width, height);
            let length = ((width * height) as f64 * fraction).floor().max(2.0) as usize;
            let mut rng = StdRng::seed_from_u64(seed);
            let generated = generator
                .generate_with_rng(&mut rng, length, &HashSet::new(), &HashSet::new())
                .unwrap();

            prop_assert_eq!(generated.path.len(), length);
            prop_assert_eq!(generated.path.check(&Grid::new(width, height)), Ok(()));
        }

        #[test]
        fn prop_later_heads_avoid_earlier_paths(
            seed in any::<u64>(),
            count in 2usize..4,
        ) {
            let generator = RandomPath::new(10, 10);
            let lengths: Vec<usize> = vec![7; count];
            let mut rng = StdRng::seed_from_u64(seed);
            let paths = generator.generate_many(&mut rng, &lengths).unwrap();

            for j in 1..paths.len() {
                let head = paths[j].path.first().unwrap();
                for earlier in &paths[..j] {
                    prop_assert!(!earlier.path.contains(head));
                    prop_assert!(earlier.path.get().iter().all(|c| !paths[j].path.contains(*c)));
                }
            }
        }
    }
}
