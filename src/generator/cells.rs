/*
cells.rs

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

//! Cells, cell sides, and walls on the task grid.
//!
//! A wall spans exactly one cell boundary. The same boundary can be described
//! from both of its cells (a `Right` wall on a cell and a `Left` wall on its
//! east neighbor), therefore walls are normalized to a single canonical form
//! so that lookups cannot depend on the form that happened to be stored.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Cell on the task grid.
///
/// Coordinates start at zero in the top-left corner; `y` grows downwards.
/// In the saved task record, a cell is the two-element array `[x, y]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    /// Create a [`Cell`] object.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to the other cell.
    pub fn distance(&self, other: Cell) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Whether the other cell is one rook move away (no diagonals).
    pub fn is_adjacent(&self, other: Cell) -> bool {
        self.distance(other) == 1
    }

    /// Return the neighboring cell on the given side, or None when the grid
    /// coordinates would underflow. The upper grid bound is not known here
    /// and is checked by the move oracle.
    pub fn neighbor(&self, side: Side) -> Option<Cell> {
        match side {
            Side::Left => {
                if self.x == 0 {
                    None
                } else {
                    Some(Cell::new(self.x - 1, self.y))
                }
            }
            Side::Top => {
                if self.y == 0 {
                    None
                } else {
                    Some(Cell::new(self.x, self.y - 1))
                }
            }
            Side::Right => Some(Cell::new(self.x + 1, self.y)),
            Side::Bottom => Some(Cell::new(self.x, self.y + 1)),
        }
    }
}

/// Serialize a [`Cell`] object as the `[x, y]` array of the task record.
impl Serialize for Cell {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.x, self.y).serialize(serializer)
    }
}

/// Deserialize a [`Cell`] object from an `[x, y]` array.
impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (x, y): (usize, usize) = Deserialize::deserialize(deserializer)?;
        Ok(Cell::new(x, y))
    }
}

/// Side of a cell that a wall can be attached to.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

impl Side {
    /// All the sides, in the order used for neighbor expansion.
    pub fn all() -> [Side; 4] {
        [Side::Right, Side::Bottom, Side::Left, Side::Top]
    }
}

/// Wall on one side of a cell.
///
/// In the saved task record, a wall is the three-element array
/// `[x, y, side]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Wall {
    pub cell: Cell,
    pub side: Side,
}

impl Wall {
    /// Create a [`Wall`] object.
    pub fn new(cell: Cell, side: Side) -> Self {
        Self { cell, side }
    }

    /// Return the canonical form of the wall.
    ///
    /// A boundary between two cells is always represented by the `Right` or
    /// `Bottom` wall of its west or north cell. Walls that face the grid
    /// perimeter (`Left` at `x == 0`, `Top` at `y == 0`) have no equivalent
    /// form and are kept as provided.
    pub fn canonical(&self) -> Wall {
        match self.side {
            Side::Left => match self.cell.neighbor(Side::Left) {
                Some(neighbor) => Wall::new(neighbor, Side::Right),
                None => *self,
            },
            Side::Top => match self.cell.neighbor(Side::Top) {
                Some(neighbor) => Wall::new(neighbor, Side::Bottom),
                None => *self,
            },
            Side::Right | Side::Bottom => *self,
        }
    }

    /// Return the canonical wall that spans the boundary between the two
    /// given cells, or None when the cells are not adjacent.
    pub fn between(from: Cell, to: Cell) -> Option<Wall> {
        if !from.is_adjacent(to) {
            return None;
        }
        let side: Side = if to.x > from.x {
            Side::Right
        } else if to.x < from.x {
            Side::Left
        } else if to.y > from.y {
            Side::Bottom
        } else {
            Side::Top
        };
        Some(Wall::new(from, side).canonical())
    }
}

/// Serialize a [`Wall`] object as the `[x, y, side]` array of the task
/// record.
impl Serialize for Wall {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.cell.x, self.cell.y, self.side).serialize(serializer)
    }
}

/// Deserialize a [`Wall`] object from an `[x, y, side]` array.
impl<'de> Deserialize<'de> for Wall {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (x, y, side): (usize, usize, Side) = Deserialize::deserialize(deserializer)?;
        Ok(Wall::new(Cell::new(x, y), side))
    }
}
