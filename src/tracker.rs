/*
tracker.rs

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

//! Follow the player's progress along a path.
//!
//! Each path goes through the following states while the player enters cells:
//!
//! ```text
//! not started --> started --> continuing ... --> completed
//!      ^             |            |
//!      +-------------+------------+  (wrong cell)
//! ```
//!
//! Entering the wrong cell on a started path resets the path and increments its fail counter.

use log::debug;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, IntoStaticStr};

use crate::generator::path::Path;

/// Result of entering a cell, for one path.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, Display, IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Outcome {
    /// The player entered the first cell.
    PathStart,

    /// The player entered the next cell.
    PathContinue,

    /// The player entered the last cell.
    PathComplete,

    /// The player left the path.
    PathFail,
}

/// How a wrong cell is reported for a path that the player has not started.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TrackingMode {
    /// One path: any wrong cell is a failure.
    #[default]
    Single,

    /// Several paths: a wrong cell only fails the paths that the player started.
    Multi,
}

impl TrackingMode {
    /// Return the mode for the given number of paths.
    pub fn for_path_count(count: usize) -> Self {
        if count > 1 {
            TrackingMode::Multi
        } else {
            TrackingMode::Single
        }
    }
}

/// Player's progress along a path.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PathProgress {
    /// Step of the last correctly entered cell, or None if the path is not started.
    cursor: Option<usize>,

    /// Number of times the player left the path after starting it.
    fail_count: usize,

    /// Whether the player entered the last cell.
    completed: bool,
}

impl PathProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn fail_count(&self) -> usize {
        self.fail_count
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_started(&self) -> bool {
        self.cursor.is_some()
    }

    /// Go back to the not started state. The fail counter is kept.
    pub fn reset(&mut self) {
        self.cursor = None;
        self.completed = false;
    }
}

/// A path and the player's progress along it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PathTracker {
    path: Path,
    progress: PathProgress,
}

impl PathTracker {
    /// Create a [`PathTracker`] object for a path that the player has not started.
    pub fn new(path: Path) -> Self {
        Self {
            path,
            progress: PathProgress::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn progress(&self) -> &PathProgress {
        &self.progress
    }

    /// Return the cell that the player must enter next, or None if the path is completed.
    pub fn expected_cell(&self) -> Option<usize> {
        match self.progress.cursor {
            Some(c) => self.path.cell(c + 1),
            None => self.path.first(),
        }
    }

    /// Process a cell that the player entered.
    ///
    /// Return None when the cell has no effect on the path: the path is already completed, or
    /// the path is not started and `mode` is [`TrackingMode::Multi`].
    pub fn enter(&mut self, cell: usize, mode: TrackingMode) -> Option<Outcome> {
        if self.progress.completed {
            return None;
        }

        if self.expected_cell() == Some(cell) {
            let cursor: usize = self.progress.cursor.map_or(0, |c| c + 1);
            self.progress.cursor = Some(cursor);
            if cursor + 1 == self.path.len() {
                self.progress.completed = true;
                return Some(Outcome::PathComplete);
            }
            if cursor == 0 {
                return Some(Outcome::PathStart);
            }
            return Some(Outcome::PathContinue);
        }

        match (self.progress.cursor, mode) {
            // Not on a started path: nothing happens for this path
            (None, TrackingMode::Multi) => None,
            (None, TrackingMode::Single) => Some(Outcome::PathFail),
            (Some(c), _) => {
                self.progress.cursor = None;
                self.progress.fail_count += 1;
                debug!(
                    "Left the path at step {c} (cell {cell}): fail count = {}",
                    self.progress.fail_count
                );
                Some(Outcome::PathFail)
            }
        }
    }

    /// Return the fraction of the path that the player traced, between 0 and 1.
    pub fn completeness(&self) -> f64 {
        match self.progress.cursor {
            Some(c) if self.path.len() > 1 => c as f64 / (self.path.len() - 1) as f64,
            Some(_) => 1.0,
            None => 0.0,
        }
    }

    /// Restart the path. The fail counter is kept.
    pub fn reset(&mut self) {
        self.progress.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> PathTracker {
        PathTracker::new(Path::from_cells(&[0, 1, 5, 6, 10]))
    }

    #[test]
    fn full_trace() {
        let mut t = tracker();
        let outcomes: Vec<Option<Outcome>> = [0, 1, 5, 6, 10]
            .iter()
            .map(|c| t.enter(*c, TrackingMode::Single))
            .collect();
        assert_eq!(
            outcomes,
            vec![
                Some(Outcome::PathStart),
                Some(Outcome::PathContinue),
                Some(Outcome::PathContinue),
                Some(Outcome::PathContinue),
                Some(Outcome::PathComplete),
            ]
        );
        assert!(t.progress().is_completed());
        assert_eq!(t.completeness(), 1.0);
        assert_eq!(t.expected_cell(), None);
        assert_eq!(t.enter(11, TrackingMode::Single), None);
    }

    #[test]
    fn fail_resets_cursor() {
        let mut t = tracker();
        assert_eq!(t.enter(0, TrackingMode::Single), Some(Outcome::PathStart));
        assert_eq!(t.enter(1, TrackingMode::Single), Some(Outcome::PathContinue));
        assert_eq!(t.completeness(), 0.25);
        assert_eq!(t.enter(2, TrackingMode::Single), Some(Outcome::PathFail));
        assert_eq!(t.progress().cursor(), None);
        assert_eq!(t.progress().fail_count(), 1);
        assert_eq!(t.completeness(), 0.0);
        assert_eq!(t.expected_cell(), Some(0));
    }

    #[test]
    fn miss_before_start() {
        let mut t = tracker();
        assert_eq!(t.enter(3, TrackingMode::Single), Some(Outcome::PathFail));
        assert_eq!(t.enter(3, TrackingMode::Multi), None);
        assert_eq!(t.progress().cursor(), None);
        assert_eq!(t.progress().fail_count(), 0);
    }

    #[test]
    fn started_path_fails_in_multi_mode() {
        let mut t = tracker();
        assert_eq!(t.enter(0, TrackingMode::Multi), Some(Outcome::PathStart));
        assert_eq!(t.enter(4, TrackingMode::Multi), Some(Outcome::PathFail));
        assert_eq!(t.progress().fail_count(), 1);
    }

    #[test]
    fn reset_keeps_fail_count() {
        let mut t = tracker();
        t.enter(0, TrackingMode::Single);
        t.enter(2, TrackingMode::Single);
        for c in [0, 1, 5, 6, 10] {
            t.enter(c, TrackingMode::Single);
        }
        assert!(t.progress().is_completed());
        t.reset();
        assert!(!t.progress().is_completed());
        assert!(!t.progress().is_started());
        assert_eq!(t.progress().fail_count(), 1);
    }

    #[test]
    fn outcome_tags() {
        assert_eq!(Outcome::PathStart.to_string(), "path-start");
        let tag: &'static str = Outcome::PathComplete.into();
        assert_eq!(tag, "path-complete");
        assert_eq!(
            serde_json::to_string(&Outcome::PathFail).unwrap(),
            "\"path-fail\""
        );
        assert_eq!(TrackingMode::for_path_count(1), TrackingMode::Single);
        assert_eq!(TrackingMode::for_path_count(3), TrackingMode::Multi);
    }
}
