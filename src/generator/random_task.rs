/*
random_task.rs

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

//! Generate a random task candidate.
//!
//! The generator places the theme's figures on free cells, then adds random
//! walls until a target density drawn from the configured band is reached.
//! Every single placement is retried a bounded number of times, so on a
//! crowded grid the generator gives up instead of looping forever.

use log::debug;
use rand::Rng;

use super::cells::{Cell, Side, Wall};
use super::task::Task;
use super::themes::{Complexity, Theme};
use super::validator::{Rejection, ValidationSettings};

/// Random task generator object.
pub struct RandomTask {
    /// Theme of the generated tasks.
    theme: Theme,

    /// Complexity level of the generated tasks.
    complexity: Complexity,

    /// Width and height of the grid.
    grid_size: usize,

    /// Density band and retry caps.
    settings: ValidationSettings,

    /// Number of placement tries consumed by the last generation.
    pub tries: usize,
}

impl RandomTask {
    /// Create a [`RandomTask`] object.
    pub fn new(theme: &Theme, complexity: Complexity, settings: &ValidationSettings) -> Self {
        Self {
            theme: theme.clone(),
            complexity,
            grid_size: complexity.grid_size(),
            settings: *settings,
            tries: 0,
        }
    }

    /// Generate and return a random task candidate.
    ///
    /// The candidate is not validated here: the validator decides whether it
    /// is solvable and has a single solution.
    ///
    /// # Errors
    ///
    /// The method returns [`Rejection::PlacementExhausted`] when a figure or
    /// wall placement runs out of tries. The caller can simply retry with
    /// new random draws.
    pub fn generate<R: Rng>(&mut self, rng: &mut R) -> Result<Task, Rejection> {
        self.tries = 0;

        let mut task: Task = Task::new(&self.theme, self.complexity);
        self.place_figures(&mut task, rng)?;
        self.place_walls(&mut task, rng)?;

        debug!(
            "Candidate task: {} figures, {} walls, {} placement tries",
            task.figures.len(),
            task.walls.len(),
            self.tries
        );
        Ok(task)
    }

    /// Place the figures of the theme's plan, each on a free random cell.
    fn place_figures<R: Rng>(&mut self, task: &mut Task, rng: &mut R) -> Result<(), Rejection> {
        for kind in self.theme.plan.kinds() {
            let cell: Cell = self.free_cell(task, rng)?;
            task.figures.insert(cell, kind);
        }
        Ok(())
    }

    /// Draw random cells until a cell with no figure comes up.
    fn free_cell<R: Rng>(&mut self, task: &Task, rng: &mut R) -> Result<Cell, Rejection> {
        for _ in 0..self.settings.max_place_tries {
            self.tries += 1;
            let cell: Cell = self.random_cell(rng);
            if !task.figures.contains_key(&cell) {
                return Ok(cell);
            }
        }
        debug!(
            "No free cell after {} tries",
            self.settings.max_place_tries
        );
        Err(Rejection::PlacementExhausted { phase: "figures" })
    }

    /// Add random walls until the target count is reached.
    fn place_walls<R: Rng>(&mut self, task: &mut Task, rng: &mut R) -> Result<(), Rejection> {
        let target: usize = self.target_wall_count(rng);
        debug!("Target wall count: {target}");

        while task.walls.len() < target {
            self.free_wall(task, rng)?;
        }
        Ok(())
    }

    /// Draw random walls until one lands on a free boundary.
    ///
    /// A candidate is dropped when its cell holds a figure, or when the
    /// boundary already carries a wall in any encoding.
    fn free_wall<R: Rng>(&mut self, task: &mut Task, rng: &mut R) -> Result<(), Rejection> {
        for _ in 0..self.settings.max_place_tries {
            self.tries += 1;
            let cell: Cell = self.random_cell(rng);
            if task.figures.contains_key(&cell) {
                continue;
            }
            let side: Side = Side::all()[rng.random_range(0..4)];
            if task.walls.insert(Wall::new(cell, side)) {
                return Ok(());
            }
        }
        debug!(
            "No free boundary after {} tries",
            self.settings.max_place_tries
        );
        Err(Rejection::PlacementExhausted { phase: "walls" })
    }

    /// Pick the wall count for this candidate.
    ///
    /// The count is drawn uniformly from the counts whose density falls
    /// inside the configured band, so the generated density always lands
    /// inside the band. A band too narrow to hold any count degrades to its
    /// lower bound and lets the validator report the density.
    fn target_wall_count<R: Rng>(&self, rng: &mut R) -> usize {
        let cells: f64 = (self.grid_size * self.grid_size) as f64;
        let min: usize = (self.settings.min_wall_density * cells).ceil() as usize;
        let max: usize = (self.settings.max_wall_density * cells).floor() as usize;
        if min >= max {
            min
        } else {
            rng.random_range(min..=max)
        }
    }

    /// Return a random cell of the grid.
    fn random_cell<R: Rng>(&self, rng: &mut R) -> Cell {
        Cell::new(
            rng.random_range(0..self.grid_size),
            rng.random_range(0..self.grid_size),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::figures::FigureKind;
    use crate::generator::themes::{FigurePlan, TaskKind, theme_map};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn candidate_follows_the_plan_and_the_band() {
        let theme: Theme = theme_map()["Alternating circles"].clone();
        let settings: ValidationSettings = ValidationSettings::default();
        let mut generator: RandomTask = RandomTask::new(&theme, Complexity::Easy, &settings);
        let mut rng: StdRng = StdRng::seed_from_u64(7);

        let task: Task = generator.generate(&mut rng).unwrap();
        assert_eq!(task.grid_size, 6);
        assert_eq!(task.figures.len(), 6);
        for kind in task.figures.values() {
            assert!(theme.allows(*kind));
        }
        let filled: usize = task
            .figures
            .values()
            .filter(|k| **k == FigureKind::FilledPoint)
            .count();
        assert_eq!(filled, 3);

        let density: f64 = task.wall_density();
        assert!(density >= settings.min_wall_density);
        assert!(density <= settings.max_wall_density);
        assert_eq!(task.solution, None);
    }

    #[test]
    fn same_seed_same_candidate() {
        let theme: Theme = theme_map()["Ordered waypoints"].clone();
        let settings: ValidationSettings = ValidationSettings::default();
        let mut generator: RandomTask = RandomTask::new(&theme, Complexity::Medium, &settings);

        let mut rng: StdRng = StdRng::seed_from_u64(99);
        let first: Task = generator.generate(&mut rng).unwrap();
        let mut rng: StdRng = StdRng::seed_from_u64(99);
        let second: Task = generator.generate(&mut rng).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn too_many_figures_exhaust_the_placement() {
        // 37 figures cannot fit on the 36 cells of the easy grid
        let theme: Theme = Theme::new(
            "Packed circles",
            TaskKind::Closed,
            &[FigureKind::FilledPoint, FigureKind::OpenPoint],
            FigurePlan::AlternatingPoints { count: 37 },
        );
        let settings: ValidationSettings = ValidationSettings::default();
        let mut generator: RandomTask = RandomTask::new(&theme, Complexity::Easy, &settings);
        let mut rng: StdRng = StdRng::seed_from_u64(1);

        assert_eq!(
            generator.generate(&mut rng),
            Err(Rejection::PlacementExhausted { phase: "figures" })
        );
    }

    #[test]
    fn impossible_density_band_exhausts_the_walls() {
        let theme: Theme = theme_map()["Point to point"].clone();
        let settings: ValidationSettings = ValidationSettings {
            min_wall_density: 3.0,
            max_wall_density: 3.0,
            ..ValidationSettings::default()
        };
        let mut generator: RandomTask = RandomTask::new(&theme, Complexity::Easy, &settings);
        let mut rng: StdRng = StdRng::seed_from_u64(1);

        assert_eq!(
            generator.generate(&mut rng),
            Err(Rejection::PlacementExhausted { phase: "walls" })
        );
    }
}
