/*
validator.rs

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

//! Validate generated tasks.
//!
//! A candidate task is checked in order: the figures must conform to the
//! theme, the wall density must stay inside the configured band, a solution
//! path must exist, and blocking the first move of that solution must leave
//! no way through.
//!
//! The last check approximates uniqueness: it rules out exactly one
//! alternate branch and can accept tasks that admit structurally different
//! solutions further away from the start. It is kept that way on purpose, a
//! full uniqueness proof would change which tasks are accepted.

use log::debug;

use super::cells::{Cell, Wall};
use super::figures::FigureKind;
use super::path::Path;
use super::path_finder::PathFinder;
use super::task::Task;
use super::themes::{TaskKind, Theme};

/// Default wall density band.
pub const DEFAULT_MIN_WALL_DENSITY: f64 = 0.1;
pub const DEFAULT_MAX_WALL_DENSITY: f64 = 0.3;

/// Default number of tries for one figure or wall placement.
pub const DEFAULT_MAX_PLACE_TRIES: usize = 100;

/// Default number of generate-then-validate attempts.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Bounds for task generation and validation.
///
/// The retry caps are deliberately part of the configuration: on large or
/// dense grids the defaults can run out before a valid task shows up, and
/// callers may need to raise them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ValidationSettings {
    /// Lowest accepted ratio of walls to grid cells.
    pub min_wall_density: f64,

    /// Highest accepted ratio of walls to grid cells.
    pub max_wall_density: f64,

    /// Number of tries for one figure or wall placement.
    pub max_place_tries: usize,

    /// Number of generate-then-validate attempts.
    pub max_attempts: usize,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            min_wall_density: DEFAULT_MIN_WALL_DENSITY,
            max_wall_density: DEFAULT_MAX_WALL_DENSITY,
            max_place_tries: DEFAULT_MAX_PLACE_TRIES,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Reason why one generation attempt was discarded.
///
/// All the variants are recoverable: the task builder drops the candidate
/// and generates a new one.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// A figure kind is not in the theme's allowed set.
    SchemaViolation { cell: Cell, kind: FigureKind },

    /// The wall density is outside the configured band.
    DensityOutOfRange { density: f64 },

    /// No path solves the task.
    Unsolvable,

    /// Blocking the first move of the solution still leaves a way through.
    NotUnique,

    /// A placement phase of the generator ran out of tries. This means the
    /// search space was exhausted, not that the configuration is invalid.
    PlacementExhausted { phase: &'static str },
}

/// Validator object.
pub struct Validator {
    settings: ValidationSettings,
}

impl Validator {
    /// Create a [`Validator`] object.
    pub fn new(settings: &ValidationSettings) -> Self {
        Self {
            settings: *settings,
        }
    }

    /// Validate the task and return its solution path.
    ///
    /// The checks run in order and stop at the first failure. The task is
    /// only mutated transiently, while the uniqueness probe wall is in
    /// place, and is always restored before the method returns.
    ///
    /// # Errors
    ///
    /// The method returns the [`Rejection`] that describes the first failed
    /// check.
    pub fn validate(&self, task: &mut Task, theme: &Theme) -> Result<Path, Rejection> {
        self.check_schema(task, theme)?;
        self.check_density(task)?;

        let (start, goal, must_visit) = Self::route(task, theme)?;
        let mut finder: PathFinder = PathFinder::new(task.grid_size);
        let path: Path = match finder.find_path(&task.walls, start, goal, &must_visit) {
            Some(p) => p,
            None => return Err(Rejection::Unsolvable),
        };

        self.check_unique(task, &mut finder, &path, start, goal, &must_visit)?;
        debug!("Task accepted with a solution of {} cells", path.len());
        Ok(path)
    }

    /// Every figure kind on the task must belong to the theme.
    fn check_schema(&self, task: &Task, theme: &Theme) -> Result<(), Rejection> {
        for cell in task.figure_cells() {
            let kind: FigureKind = task.figures[&cell];
            if !theme.allows(kind) {
                debug!("Figure {:?} on {:?} is not allowed by {}", kind, cell, theme.name);
                return Err(Rejection::SchemaViolation { cell, kind });
            }
        }
        Ok(())
    }

    /// The wall density must stay inside the configured band.
    fn check_density(&self, task: &Task) -> Result<(), Rejection> {
        let density: f64 = task.wall_density();
        if density < self.settings.min_wall_density || density > self.settings.max_wall_density {
            return Err(Rejection::DensityOutOfRange { density });
        }
        Ok(())
    }

    /// Return the start cell, the goal cell, and the waypoint set for the
    /// theme's route.
    ///
    /// A closed task is a round trip: it starts and ends on its first figure
    /// cell (in row-then-column order) and must visit every figure cell. An
    /// open task walks from its start figure to its end figure.
    fn route(task: &Task, theme: &Theme) -> Result<(Cell, Cell, Vec<Cell>), Rejection> {
        match theme.kind {
            TaskKind::Closed => {
                let cells: Vec<Cell> = task.figure_cells();
                match cells.first().copied() {
                    Some(start) => Ok((start, start, cells)),
                    None => Err(Rejection::Unsolvable),
                }
            }
            TaskKind::Open => {
                let start: Cell = match task.figure_cell(FigureKind::Start) {
                    Some(c) => c,
                    None => return Err(Rejection::Unsolvable),
                };
                let goal: Cell = match task.figure_cell(FigureKind::End) {
                    Some(c) => c,
                    None => return Err(Rejection::Unsolvable),
                };
                Ok((start, goal, Vec::new()))
            }
        }
    }

    /// Block the first move of the solution and search again.
    ///
    /// Finding another path means the solution is not the single forced way
    /// through. The probe wall spans the whole boundary, so a cyclic
    /// solution cannot simply be walked in reverse.
    fn check_unique(
        &self,
        task: &mut Task,
        finder: &mut PathFinder,
        path: &Path,
        start: Cell,
        goal: Cell,
        must_visit: &[Cell],
    ) -> Result<(), Rejection> {
        let (Some(first), Some(second)) = (path.first(), path.second()) else {
            // A single-cell solution has no first move to block
            return Ok(());
        };
        let Some(probe) = Wall::between(first, second) else {
            return Ok(());
        };

        // The solution crossed this boundary, so it cannot already carry a
        // wall; the insert check keeps the revert correct anyway.
        let inserted: bool = task.walls.insert(probe);
        finder.invalidate();
        let alternate: Option<Path> = finder.find_path(&task.walls, start, goal, must_visit);
        if inserted {
            task.walls.remove(probe);
        }
        finder.invalidate();

        match alternate {
            Some(other) => {
                debug!(
                    "Alternate solution of {} cells with the first move blocked",
                    other.len()
                );
                Err(Rejection::NotUnique)
            }
            None => Ok(()),
        }
    }
}
