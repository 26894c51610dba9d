/*
path.rs

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

//! Path over the task grid.

use serde::{Deserialize, Serialize};

use super::cells::Cell;

/// Path object.
///
/// The path is an ordered list of cells where each consecutive pair is one
/// rook move apart. A cyclic path may list the same cell more than once.
/// In the saved task record, the path is the array `[[x, y], ...]`.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(transparent)]
pub struct Path {
    cells: Vec<Cell>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Path {
    /// Create an empty [`Path`] object with room for the given number of
    /// cells.
    pub fn new(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
        }
    }

    /// Create a [`Path`] object from a list of cells.
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Add a cell to the path.
    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Get the number of cells in the path.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the path is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the cell is in the path.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Return a reference to the path cells.
    pub fn get(&self) -> &Vec<Cell> {
        &self.cells
    }

    /// Return the first cell in the path.
    pub fn first(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    /// Return the second cell in the path, the destination of the first
    /// move.
    pub fn second(&self) -> Option<Cell> {
        self.cells.get(1).copied()
    }

    /// Return the last cell in the path.
    pub fn last(&self) -> Option<Cell> {
        self.cells.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ends_of_the_path() {
        let path: Path = Path::from_cells(vec![
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(1, 1),
        ]);
        assert_eq!(path.len(), 3);
        assert_eq!(path.first(), Some(Cell::new(0, 0)));
        assert_eq!(path.second(), Some(Cell::new(1, 0)));
        assert_eq!(path.last(), Some(Cell::new(1, 1)));
        assert!(path.contains(Cell::new(1, 0)));
        assert!(!path.contains(Cell::new(0, 1)));

        let empty: Path = Path::new(4);
        assert!(empty.is_empty());
        assert_eq!(empty.first(), None);
        assert_eq!(empty.second(), None);
    }

    #[test]
    fn record_format() {
        let path: Path = Path::from_cells(vec![Cell::new(0, 0), Cell::new(0, 1)]);
        let json: String = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "[[0,0],[0,1]]");
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
