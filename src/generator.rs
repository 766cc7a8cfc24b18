/*
generator.rs

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

//! Playing field and random path generation.
//!
//! The playing field is a [`grid::Grid`] object: a rectangle of cells addressed by their linear
//! index `y * width + x` (see [`coordinate::Coordinate`] for the conversion).
//!
//! To play, one or more random paths must be hidden in the grid.
//! A path is represented by a [`path::Path`] object.
//! You create paths by creating a [`random_path::RandomPath`] object and by using its
//! [`random_path::RandomPath::generate`] or [`random_path::RandomPath::generate_many`]
//! methods.
//! The path length is limited by a fraction of the grid size (80% by default).
//! If no path is found after a maximum number of attempts, the methods return an error.
//!
//! Once generated, the step order of each path cell is written into the grid with
//! [`grid::Grid::bake`].

pub mod coordinate;
pub mod grid;
pub mod path;
pub mod random_path;
