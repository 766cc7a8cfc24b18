/*
lib.rs

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

//! Walktrace: retrace the random walks hidden in a grid.
//!
//! One or more paths are hidden in a rectangular grid. The player must retrace each path cell
//! by cell, by moving the pointer or the keyboard focus. Leaving a started path resets it.
//!
//! * [`generator`] builds the grid and the random paths.
//! * [`tracker`] follows the player's progress along one path.
//! * [`game`] owns a round: the grid, the paths, and the progress. The rendering layer talks to
//!   the [`game::Game`] object only.
//! * [`config`] holds the round parameters.

pub mod config;
pub mod game;
pub mod generator;
pub mod tracker;
