/*
config.rs

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

//! Game parameters.
//!
//! A [`GameConfig`] object describes the round to generate: the grid size, the number of paths,
//! and how long the paths are.
//! The parameters can be read from a JSON file. Missing fields get their default value:
//!
//! ```json
//! { "width": 8, "height": 8, "path_count": 2, "min_length": 7, "max_length": 12 }
//! ```

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::generator::random_path::{FILL_FRACTION, MAX_ATTEMPTS};

/// Type of configuration errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The grid has no cells.
    EmptyGrid { width: usize, height: usize },

    /// The round must have at least one path.
    NoPath,

    /// The length range `[min, max)` contains no value.
    EmptyLengthRange { min: usize, max: usize },

    /// The fill fraction must be in `(0, 1]`.
    InvalidFillFraction(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::EmptyGrid { width, height } => {
                write!(f, "the {width}x{height} field has no cells")
            }
            ConfigError::NoPath => write!(f, "at least one path is required"),
            ConfigError::EmptyLengthRange { min, max } => {
                write!(f, "the path length range [{min}, {max}) is empty")
            }
            ConfigError::InvalidFillFraction(v) => {
                write!(f, "the fill fraction ({v}) must be greater than 0 and at most 1")
            }
        }
    }
}

impl Error for ConfigError {}

/// Parameters of a round.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// Number of columns.
    pub width: usize,

    /// Number of rows.
    pub height: usize,

    /// Number of paths hidden in the grid.
    pub path_count: usize,

    /// Length of every path. When not set, the length of each path is randomly selected in
    /// `[min_length, max_length)`.
    pub length: Option<usize>,

    /// Shortest random path length (inclusive).
    pub min_length: usize,

    /// Longest random path length (exclusive).
    pub max_length: usize,

    /// Fraction of the grid that a path can cover.
    pub fill_fraction: f64,

    /// Number of attempts for generating a path before giving up.
    pub max_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 6,
            height: 6,
            path_count: 1,
            length: None,
            min_length: 7,
            max_length: 12,
            fill_fraction: FILL_FRACTION,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Read the parameters from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        debug!("Configuration file: {:?}", path.as_ref());
        let file: File = File::open(path)?;
        let reader: BufReader<File> = BufReader::new(file);
        let config: GameConfig = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Verify the parameters.
    ///
    /// Whether the path length fits in the grid is verified by the path generator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        if self.path_count == 0 {
            return Err(ConfigError::NoPath);
        }
        if self.length.is_none() && self.min_length >= self.max_length {
            return Err(ConfigError::EmptyLengthRange {
                min: self.min_length,
                max: self.max_length,
            });
        }
        if !(self.fill_fraction > 0.0 && self.fill_fraction <= 1.0) {
            return Err(ConfigError::InvalidFillFraction(self.fill_fraction));
        }
        Ok(())
    }

    /// Return the length of the next path: the fixed length if set, otherwise a random length
    /// in the configured range.
    pub fn sample_length<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        match self.length {
            Some(l) => l,
            None => rng.random_range(self.min_length..self.max_length),
        }
    }
}
