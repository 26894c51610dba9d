/*
moves.rs

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

//! Answer whether a single rook move between two cells is possible.

use std::collections::HashMap;

use super::cells::Cell;
use super::walls::WallSet;

/// Move oracle object.
///
/// The oracle answers whether one rook move between two cells is blocked by
/// a wall, and caches its answers by ordered cell pair. The cache only stays
/// correct for one wall set: callers that mutate the walls must call
/// [`MoveOracle::invalidate`] before asking again.
#[derive(Debug, Clone)]
pub struct MoveOracle {
    /// Width and height of the grid.
    grid_size: usize,

    /// Cached answers, keyed by the ordered `(from, to)` pair.
    cache: HashMap<(Cell, Cell), bool>,
}

impl MoveOracle {
    /// Create a [`MoveOracle`] object for a grid of the given size.
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            cache: HashMap::new(),
        }
    }

    /// Whether a rook can move from the first to the second cell.
    ///
    /// Out-of-bounds or non-adjacent cell pairs are refused without
    /// consulting the walls.
    pub fn can_move(&mut self, walls: &WallSet, from: Cell, to: Cell) -> bool {
        if let Some(answer) = self.cache.get(&(from, to)) {
            return *answer;
        }
        let answer: bool = self.compute(walls, from, to);
        self.cache.insert((from, to), answer);
        answer
    }

    /// Drop all the cached answers.
    ///
    /// Must be called every time the wall set changes, for example around
    /// the uniqueness probe of the validator.
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }

    /// Compute the answer for a cell pair that is not in the cache.
    fn compute(&self, walls: &WallSet, from: Cell, to: Cell) -> bool {
        if !self.in_bounds(from) || !self.in_bounds(to) {
            return false;
        }
        if !from.is_adjacent(to) {
            return false;
        }
        !walls.blocks(from, to)
    }

    /// Whether the cell is on the grid.
    fn in_bounds(&self, cell: Cell) -> bool {
        cell.x < self.grid_size && cell.y < self.grid_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::cells::{Side, Wall};

    #[test]
    fn refuses_bad_pairs() {
        let walls: WallSet = WallSet::new();
        let mut oracle: MoveOracle = MoveOracle::new(4);

        // Out of bounds
        assert!(!oracle.can_move(&walls, Cell::new(3, 3), Cell::new(4, 3)));
        assert!(!oracle.can_move(&walls, Cell::new(4, 0), Cell::new(3, 0)));
        // Not adjacent
        assert!(!oracle.can_move(&walls, Cell::new(0, 0), Cell::new(2, 0)));
        assert!(!oracle.can_move(&walls, Cell::new(0, 0), Cell::new(1, 1)));
        assert!(!oracle.can_move(&walls, Cell::new(0, 0), Cell::new(0, 0)));
    }

    #[test]
    fn walls_block_either_encoding() {
        let mut walls: WallSet = WallSet::new();
        walls.insert(Wall::new(Cell::new(1, 0), Side::Left));
        let mut oracle: MoveOracle = MoveOracle::new(4);

        assert!(!oracle.can_move(&walls, Cell::new(0, 0), Cell::new(1, 0)));
        assert!(!oracle.can_move(&walls, Cell::new(1, 0), Cell::new(0, 0)));
        assert!(oracle.can_move(&walls, Cell::new(0, 0), Cell::new(0, 1)));
    }

    #[test]
    fn cache_coherence() {
        let mut walls: WallSet = WallSet::new();
        let mut oracle: MoveOracle = MoveOracle::new(4);

        // Unchanged wall set: two consecutive calls agree
        assert!(oracle.can_move(&walls, Cell::new(0, 0), Cell::new(1, 0)));
        assert!(oracle.can_move(&walls, Cell::new(0, 0), Cell::new(1, 0)));

        // After a wall mutation plus invalidation, the stale answer is gone
        walls.insert(Wall::new(Cell::new(0, 0), Side::Right));
        oracle.invalidate();
        assert!(!oracle.can_move(&walls, Cell::new(0, 0), Cell::new(1, 0)));

        walls.remove(Wall::new(Cell::new(0, 0), Side::Right));
        oracle.invalidate();
        assert!(oracle.can_move(&walls, Cell::new(0, 0), Cell::new(1, 0)));
    }
}
