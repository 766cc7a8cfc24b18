/*
game.rs

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

//! Manage the status of a round in progress.
//!
//! A [`Game`] object owns the grid, the hidden paths, and the player's progress along each
//! path. The rendering layer creates one object per round and feeds it with the cells that the
//! player enters (pointer moves or keyboard focus moves), through [`Game::enter_position`].

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use crate::config::{ConfigError, GameConfig};
use crate::generator::coordinate::Coordinate;
use crate::generator::grid::Grid;
use crate::generator::path::Path;
use crate::generator::random_path::{GeneratedPath, MIN_LENGTH, RandomPath, RandomPathError};
use crate::tracker::{Outcome, PathTracker, TrackingMode};

/// Type of errors.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// The round parameters are not valid.
    Config(ConfigError),

    /// The paths cannot be generated.
    Generator(RandomPathError),

    /// A provided path is not a valid path for the grid.
    InvalidPath { path: usize, reason: String },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::Config(e) => write!(f, "invalid configuration: {e}"),
            GameError::Generator(e) => write!(f, "cannot generate the paths: {e}"),
            GameError::InvalidPath { path, reason } => write!(f, "path {path}: {reason}"),
        }
    }
}

impl Error for GameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GameError::Config(e) => Some(e),
            GameError::Generator(e) => Some(e),
            GameError::InvalidPath { .. } => None,
        }
    }
}

impl From<ConfigError> for GameError {
    fn from(e: ConfigError) -> Self {
        GameError::Config(e)
    }
}

impl From<RandomPathError> for GameError {
    fn from(e: RandomPathError) -> Self {
        GameError::Generator(e)
    }
}

/// A change in the state of a path, caused by the player entering a cell.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Index of the path in the game.
    pub path: usize,

    pub outcome: Outcome,
}

/// Manage the status of the round in progress.
///
/// Only [`Game::new`] and [`Game::from_paths`] build the object.
#[derive(Serialize, Debug, Clone)]
pub struct Game {
    /// Step order of the path cells.
    grid: Grid,

    /// Paths and the player's progress along them.
    trackers: Vec<PathTracker>,

    mode: TrackingMode,

    /// Number of attempts it took to generate each path.
    attempts: Vec<usize>,

    /// Duration in seconds it took to generate each path.
    durations: Vec<f32>,

    /// Last cell entered by the player. Entering the same cell again is ignored.
    last_entered: Option<usize>,
}

impl Game {
    /// Create a [`Game`] object with random paths, using the thread random number generator.
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        Self::new_with_rng(config, &mut rand::rng())
    }

    /// Create a [`Game`] object with random paths.
    ///
    /// # Errors
    ///
    /// The method returns an error if the configuration is not valid, or if the paths cannot
    /// be generated.
    pub fn new_with_rng<R: Rng + ?Sized>(
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        config.validate()?;

        let lengths: Vec<usize> = (0..config.path_count)
            .map(|_| config.sample_length(rng))
            .collect();
        debug!(
            "New {}x{} game with path lengths {lengths:?}",
            config.width, config.height
        );

        let generator: RandomPath = RandomPath::new(config.width, config.height)
            .with_fill_fraction(config.fill_fraction)
            .with_max_attempts(config.max_attempts);
        let generated: Vec<GeneratedPath> = generator.generate_many(rng, &lengths)?;

        let attempts: Vec<usize> = generated.iter().map(|g| g.attempts).collect();
        let durations: Vec<f32> = generated.iter().map(|g| g.duration).collect();
        let paths: Vec<Path> = generated.into_iter().map(|g| g.path).collect();
        let mut game: Game = Self::build(config.width, config.height, paths);
        game.attempts = attempts;
        game.durations = durations;
        Ok(game)
    }

    /// Create a [`Game`] object from known paths.
    ///
    /// # Errors
    ///
    /// The method returns an error if a path is shorter than two cells, is not a walk inside
    /// the grid, or goes through a cell or the head of a previous path.
    pub fn from_paths(width: usize, height: usize, paths: Vec<Path>) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height }.into());
        }
        if paths.is_empty() {
            return Err(ConfigError::NoPath.into());
        }

        let grid: Grid = Grid::new(width, height);
        for (i, path) in paths.iter().enumerate() {
            if path.len() < MIN_LENGTH {
                return Err(GameError::InvalidPath {
                    path: i,
                    reason: format!("the path must have at least {MIN_LENGTH} cells"),
                });
            }
            path.check(&grid)
                .map_err(|reason| GameError::InvalidPath { path: i, reason })?;
            if let Some(cell) = paths[..i]
                .iter()
                .flat_map(|p| p.get().iter())
                .find(|c| path.contains(**c))
            {
                return Err(GameError::InvalidPath {
                    path: i,
                    reason: format!("cell {cell} belongs to a previous path"),
                });
            }
        }
        Ok(Self::build(width, height, paths))
    }

    /// Bake the paths into a new grid.
    fn build(width: usize, height: usize, paths: Vec<Path>) -> Self {
        let mut grid: Grid = Grid::new(width, height);
        for path in &paths {
            grid.bake(path);
        }
        Self {
            grid,
            mode: TrackingMode::for_path_count(paths.len()),
            attempts: vec![0; paths.len()],
            durations: vec![0.0; paths.len()],
            trackers: paths.into_iter().map(PathTracker::new).collect(),
            last_entered: None,
        }
    }

    /// Restart the round with the same paths. The fail counters are kept.
    pub fn reset(&mut self) {
        for tracker in &mut self.trackers {
            tracker.reset();
        }
        self.last_entered = None;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn mode(&self) -> TrackingMode {
        self.mode
    }

    pub fn trackers(&self) -> &[PathTracker] {
        &self.trackers
    }

    pub fn tracker(&self, path: usize) -> Option<&PathTracker> {
        self.trackers.get(path)
    }

    /// Return the number of attempts it took to generate each path. Zero for paths provided
    /// with [`Game::from_paths`].
    pub fn generation_attempts(&self) -> &[usize] {
        &self.attempts
    }

    /// Return the duration in seconds it took to generate each path. Zero for paths provided
    /// with [`Game::from_paths`].
    pub fn generation_durations(&self) -> &[f32] {
        &self.durations
    }

    pub fn last_entered(&self) -> Option<usize> {
        self.last_entered
    }

    /// Return the path that goes through the given cell and the step order of the cell in that
    /// path (starting at 1).
    pub fn path_at(&self, index: usize) -> Option<(usize, usize)> {
        self.trackers
            .iter()
            .enumerate()
            .find_map(|(i, t)| t.path().cell_index(index).map(|s| (i, s + 1)))
    }

    /// Process the cell (linear index) that the player entered.
    ///
    /// Return the paths for which the state changed and how. The list is empty when the cell
    /// is the same as the previous one, when the round is over, or when the cell has no effect
    /// on any path.
    pub fn enter_position(&mut self, index: usize) -> Vec<Transition> {
        if !self.grid.contains(index) {
            warn!(
                "Cell {index} is outside the {}x{} grid",
                self.grid.width(),
                self.grid.height()
            );
            return Vec::new();
        }
        if self.last_entered == Some(index) || self.is_completed() {
            return Vec::new();
        }
        self.last_entered = Some(index);

        let mode: TrackingMode = self.mode;
        let transitions: Vec<Transition> = self
            .trackers
            .iter_mut()
            .enumerate()
            .filter_map(|(path, t)| t.enter(index, mode).map(|outcome| Transition { path, outcome }))
            .collect();
        for t in &transitions {
            debug!("Cell {index}: path {} {}", t.path, t.outcome);
        }
        transitions
    }

    /// Process the cell (coordinate) that the player entered.
    pub fn enter_coordinate(&mut self, coordinate: Coordinate) -> Vec<Transition> {
        match self.grid.index(coordinate) {
            Some(index) => self.enter_position(index),
            None => {
                warn!("Coordinate {coordinate} is outside the grid");
                Vec::new()
            }
        }
    }

    /// Whether the player traced all the paths.
    pub fn is_completed(&self) -> bool {
        self.trackers.iter().all(|t| t.progress().is_completed())
    }

    /// Return the completeness of the most advanced path, between 0 and 1.
    pub fn completeness(&self) -> f64 {
        self.trackers
            .iter()
            .map(|t| t.completeness())
            .fold(0.0, f64::max)
    }

    /// Return the completeness of the given path, between 0 and 1.
    pub fn path_completeness(&self, path: usize) -> Option<f64> {
        self.trackers.get(path).map(|t| t.completeness())
    }

    /// Return the fail counter of each path.
    pub fn fail_counts(&self) -> Vec<usize> {
        self.trackers
            .iter()
            .map(|t| t.progress().fail_count())
            .collect()
    }
}
