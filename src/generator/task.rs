/*
task.rs

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

//! A generated task: the grid with its walls, figures, and solution.
//!
//! The saved record keeps walls as `[x, y, side]` triples, figures as a map
//! from `"x,y"` keys to integer kind codes, and the solution as a list of
//! `[x, y]` cells. Inside the program, figures are keyed by [`Cell`] values
//! instead of coordinate strings, so the record is converted on (de)serialization.

use std::collections::{BTreeMap, HashMap};

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use super::cells::{Cell, Wall};
use super::figures::FigureKind;
use super::path::Path;
use super::themes::{Complexity, TaskKind, Theme};
use super::walls::WallSet;

/// A task under construction or ready to be saved.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Route category, closed or open.
    pub task_type: TaskKind,

    /// Name of the theme the task was generated for.
    pub theme: String,

    /// Display name of the task.
    pub name: String,

    /// Complexity level.
    pub complexity: Complexity,

    /// Width and height of the grid.
    pub grid_size: usize,

    /// Walls on the grid.
    pub walls: WallSet,

    /// Figures, at most one per cell.
    pub figures: HashMap<Cell, FigureKind>,

    /// Solution path, attached by the validator once the task is accepted.
    pub solution: Option<Path>,
}

impl Task {
    /// Create an empty [`Task`] object for the given theme and complexity.
    pub fn new(theme: &Theme, complexity: Complexity) -> Self {
        Self {
            task_type: theme.kind,
            theme: String::from(&theme.name),
            name: format!("{} - {} ({})", theme.kind, theme.name, complexity),
            complexity,
            grid_size: complexity.grid_size(),
            walls: WallSet::new(),
            figures: HashMap::new(),
            solution: None,
        }
    }

    /// Ratio of the wall count to the cell count.
    pub fn wall_density(&self) -> f64 {
        self.walls.len() as f64 / (self.grid_size * self.grid_size) as f64
    }

    /// Return the cells that hold a figure, sorted by row then column.
    pub fn figure_cells(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.figures.keys().copied().collect();
        cells.sort_unstable_by_key(|c| (c.y, c.x));
        cells
    }

    /// Return the cell that holds the given figure kind.
    ///
    /// If several cells hold the kind, the one smallest in row-then-column
    /// order is returned, so the answer does not depend on map iteration
    /// order.
    pub fn figure_cell(&self, kind: FigureKind) -> Option<Cell> {
        self.figures
            .iter()
            .filter(|(_, k)| **k == kind)
            .map(|(cell, _)| *cell)
            .min_by_key(|cell| (cell.y, cell.x))
    }
}

/// Wire form of a task, shaped like the saved record.
#[derive(serde::Serialize, serde::Deserialize)]
struct TaskRecord {
    task_type: String,
    theme: String,
    name: String,
    complexity: Complexity,
    grid_size: usize,
    walls: Vec<Wall>,
    figures: BTreeMap<String, i32>,
    solution: Option<Path>,
}

/// Serialize a [`Task`] object as the saved record.
impl Serialize for Task {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let figures: BTreeMap<String, i32> = self
            .figures
            .iter()
            .map(|(cell, kind)| (format!("{},{}", cell.x, cell.y), kind.code()))
            .collect();
        let record: TaskRecord = TaskRecord {
            task_type: String::from(self.task_type.name()),
            theme: String::from(&self.theme),
            name: String::from(&self.name),
            complexity: self.complexity,
            grid_size: self.grid_size,
            walls: self.walls.sorted(),
            figures,
            solution: self.solution.clone(),
        };
        record.serialize(serializer)
    }
}

/// Deserialize a [`Task`] object from the saved record.
impl<'de> Deserialize<'de> for Task {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record: TaskRecord = TaskRecord::deserialize(deserializer)?;

        let task_type: TaskKind = TaskKind::from_name(&record.task_type)
            .ok_or_else(|| de::Error::custom(format!("unknown task type {}", record.task_type)))?;

        let mut figures: HashMap<Cell, FigureKind> = HashMap::with_capacity(record.figures.len());
        for (key, code) in &record.figures {
            let cell: Cell = parse_cell_key(key)
                .ok_or_else(|| de::Error::custom(format!("malformed cell key {key}")))?;
            let kind: FigureKind = FigureKind::from_code(*code)
                .ok_or_else(|| de::Error::custom(format!("unknown figure kind code {code}")))?;
            figures.insert(cell, kind);
        }

        Ok(Task {
            task_type,
            theme: record.theme,
            name: record.name,
            complexity: record.complexity,
            grid_size: record.grid_size,
            walls: record.walls.into_iter().collect(),
            figures,
            solution: record.solution,
        })
    }
}

/// Parse a `"x,y"` figure key of the saved record.
fn parse_cell_key(key: &str) -> Option<Cell> {
    let (x, y) = key.split_once(',')?;
    Some(Cell::new(
        x.trim().parse().ok()?,
        y.trim().parse().ok()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::cells::Side;
    use crate::generator::themes::theme_map;
    use serde_json::json;

    fn sample_task() -> Task {
        let themes = theme_map();
        let mut task: Task = Task::new(&themes["Point to point"], Complexity::Easy);
        task.grid_size = 3;
        task.walls.insert(Wall::new(Cell::new(0, 0), Side::Bottom));
        task.walls.insert(Wall::new(Cell::new(1, 0), Side::Bottom));
        task.figures.insert(Cell::new(0, 0), FigureKind::Start);
        task.figures.insert(Cell::new(2, 2), FigureKind::End);
        task.solution = Some(Path::from_cells(vec![
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(2, 0),
        ]));
        task
    }

    #[test]
    fn record_shape() {
        let task: Task = sample_task();
        let value: serde_json::Value = serde_json::to_value(&task).unwrap();

        assert_eq!(value["task_type"], "open");
        assert_eq!(value["theme"], "Point to point");
        assert_eq!(value["name"], "open - Point to point (Easy)");
        assert_eq!(value["grid_size"], 3);
        assert_eq!(value["walls"][0], json!([0, 0, "bottom"]));
        assert_eq!(value["walls"][1], json!([1, 0, "bottom"]));
        assert_eq!(value["figures"]["0,0"], 3);
        assert_eq!(value["figures"]["2,2"], 4);
        assert_eq!(value["solution"][2], json!([2, 0]));
    }

    #[test]
    fn record_round_trip() {
        let task: Task = sample_task();
        let json: String = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);

        let mut no_solution: Task = sample_task();
        no_solution.solution = None;
        let json: String = serde_json::to_string(&no_solution).unwrap();
        assert!(json.contains("\"solution\":null"));
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, no_solution);
    }

    #[test]
    fn bad_records_are_refused() {
        let task: Task = sample_task();
        let mut value: serde_json::Value = serde_json::to_value(&task).unwrap();

        value["figures"]["1,1"] = json!(9);
        assert!(serde_json::from_value::<Task>(value.clone()).is_err());

        value["figures"] = json!({"nowhere": 3});
        assert!(serde_json::from_value::<Task>(value.clone()).is_err());

        value["figures"] = json!({});
        value["task_type"] = json!("curved");
        assert!(serde_json::from_value::<Task>(value).is_err());
    }

    #[test]
    fn figure_lookups() {
        let task: Task = sample_task();
        assert_eq!(task.figure_cell(FigureKind::Start), Some(Cell::new(0, 0)));
        assert_eq!(task.figure_cell(FigureKind::End), Some(Cell::new(2, 2)));
        assert_eq!(task.figure_cell(FigureKind::Cross), None);
        assert_eq!(
            task.figure_cells(),
            vec![Cell::new(0, 0), Cell::new(2, 2)]
        );
        assert!((task.wall_density() - 2.0 / 9.0).abs() < 1e-9);
    }
}
