/*
generator.rs

Copyright 2025 Hervé Quatremain

This file is part of Rooktask.

Rooktask is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Rooktask is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Rooktask. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Generate tasks and validate their solutions.
//!
//! A task is a square grid with walls on cell boundaries and figures on
//! cells. The solver of a task walks a rook (one cell at a time, no
//! diagonals, never through a wall) along the route that its theme
//! describes: a closed round trip through every figure, or an open walk from
//! a start figure to an end figure.
//!
//! To build a task, create a [`builder::TaskBuilder`] object and use its
//! [`builder::TaskBuilder::generate_valid`] method. The builder repeatedly
//! asks [`random_task::RandomTask`] for a random candidate and
//! [`validator::Validator`] for a verdict, until a candidate is solvable and
//! has a single solution under the first-move-blocking check. The accepted
//! [`task::Task`] object carries its solution and serializes to the record
//! that the persistence and rendering collaborators consume.
//!
//! The path searches run on [`path_finder::PathFinder`], an A* over the grid
//! graph, which asks [`moves::MoveOracle`] whether single rook moves are
//! possible.

pub mod builder;
pub mod cells;
pub mod figures;
pub mod moves;
pub mod path;
pub mod path_finder;
pub mod random_task;
pub mod task;
pub mod themes;
pub mod validator;
pub mod walls;
