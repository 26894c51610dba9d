/*
path_finder.rs

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

//! Find a path between two cells with the A* algorithm.
//!
//! The search state is the pair of the current cell and the subset of the
//! required waypoints that the walk already visited. With that state, "visit
//! every waypoint and then reach the goal" is a single search, which is how
//! cyclic tasks (start cell == goal cell) are solved.

use log::debug;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::cells::{Cell, Side};
use super::moves::MoveOracle;
use super::path::Path;
use super::walls::WallSet;

/// Search state: the current cell and the visited-waypoint bitmask.
type State = (Cell, u64);

/// Entry of the search frontier.
#[derive(Debug, PartialEq, Eq)]
struct Node {
    /// Estimated total cost `g + h`.
    f: usize,

    /// Insertion counter, the tie-break between equal-cost entries.
    counter: usize,

    /// Moves walked so far.
    g: usize,

    cell: Cell,
    visited: u64,
}

/// Order the frontier by lowest `f` first, and among equal costs by
/// insertion order, so that the search result is deterministic.
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so the comparison is reversed
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.counter.cmp(&self.counter))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Path finder object.
pub struct PathFinder {
    /// Width and height of the grid.
    grid_size: usize,

    /// Single-move oracle with its answer cache.
    oracle: MoveOracle,

    /// Number of states expanded by the last search.
    pub expanded: usize,
}

impl PathFinder {
    /// Create a [`PathFinder`] object for a grid of the given size.
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            oracle: MoveOracle::new(grid_size),
            expanded: 0,
        }
    }

    /// Drop the cached move answers. Must be called every time the wall set
    /// changes between searches.
    pub fn invalidate(&mut self) {
        self.oracle.invalidate();
    }

    /// Find a shortest path from `start` to `goal` that walks through every
    /// cell of `must_visit`.
    ///
    /// The path includes both ends. When `start == goal` and `must_visit` is
    /// empty, the path is the single starting cell. Return None when no path
    /// exists.
    pub fn find_path(
        &mut self,
        walls: &WallSet,
        start: Cell,
        goal: Cell,
        must_visit: &[Cell],
    ) -> Option<Path> {
        self.expanded = 0;
        if !self.in_bounds(start) || !self.in_bounds(goal) {
            return None;
        }

        let mut waypoints: Vec<Cell> = must_visit.to_vec();
        waypoints.sort_unstable();
        waypoints.dedup();
        if waypoints.len() >= 64 || waypoints.iter().any(|w| !self.in_bounds(*w)) {
            // A waypoint outside the grid can never be visited
            return None;
        }
        let full_mask: u64 = if waypoints.is_empty() {
            0
        } else {
            (1u64 << waypoints.len()) - 1
        };

        let mut frontier: BinaryHeap<Node> = BinaryHeap::new();
        let mut best_g: HashMap<State, usize> = HashMap::new();
        let mut came_from: HashMap<State, State> = HashMap::new();
        let mut expanded_states: HashSet<State> = HashSet::new();
        let mut counter: usize = 0;

        let start_mask: u64 = Self::mark(&waypoints, 0, start);
        best_g.insert((start, start_mask), 0);
        frontier.push(Node {
            f: start.distance(goal),
            counter,
            g: 0,
            cell: start,
            visited: start_mask,
        });

        while let Some(node) = frontier.pop() {
            let state: State = (node.cell, node.visited);

            // A state already expanded is never expanded again
            if !expanded_states.insert(state) {
                continue;
            }
            self.expanded += 1;

            if node.cell == goal && node.visited == full_mask {
                let path: Path = Self::rebuild(&came_from, state);
                debug!(
                    "Path of {} cells found, {} states expanded",
                    path.len(),
                    self.expanded
                );
                return Some(path);
            }

            for side in Side::all() {
                let Some(next) = node.cell.neighbor(side) else {
                    continue;
                };
                if !self.oracle.can_move(walls, node.cell, next) {
                    continue;
                }
                let next_state: State = (next, Self::mark(&waypoints, node.visited, next));
                if expanded_states.contains(&next_state) {
                    continue;
                }
                let g: usize = node.g + 1;
                if g < best_g.get(&next_state).copied().unwrap_or(usize::MAX) {
                    best_g.insert(next_state, g);
                    came_from.insert(next_state, state);
                    counter += 1;
                    frontier.push(Node {
                        f: g + next.distance(goal),
                        counter,
                        g,
                        cell: next,
                        visited: next_state.1,
                    });
                }
            }
        }

        debug!(
            "No path from {:?} to {:?}, {} states expanded",
            start, goal, self.expanded
        );
        None
    }

    /// Add the cell to the visited-waypoint bitmask if the cell is a
    /// waypoint.
    fn mark(waypoints: &[Cell], mask: u64, cell: Cell) -> u64 {
        match waypoints.binary_search(&cell) {
            Ok(i) => mask | (1u64 << i),
            Err(_) => mask,
        }
    }

    /// Walk the parent links back from the goal state and return the path.
    fn rebuild(came_from: &HashMap<State, State>, last: State) -> Path {
        let mut cells: Vec<Cell> = vec![last.0];
        let mut state: State = last;
        while let Some(previous) = came_from.get(&state) {
            cells.push(previous.0);
            state = *previous;
        }

        let mut path: Path = Path::new(cells.len());
        for cell in cells.into_iter().rev() {
            path.push(cell);
        }
        path
    }

    /// Whether the cell is on the grid.
    fn in_bounds(&self, cell: Cell) -> bool {
        cell.x < self.grid_size && cell.y < self.grid_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::cells::Wall;

    #[test]
    fn shortest_path_on_empty_grid() {
        let walls: WallSet = WallSet::new();
        let mut finder: PathFinder = PathFinder::new(4);

        let path: Path = finder
            .find_path(&walls, Cell::new(0, 0), Cell::new(3, 3), &[])
            .unwrap();
        // Corner to corner on a 4x4 grid: 6 moves, 7 cells
        assert_eq!(path.len(), 7);
        assert_eq!(path.first(), Some(Cell::new(0, 0)));
        assert_eq!(path.last(), Some(Cell::new(3, 3)));
        for pair in path.get().windows(2) {
            assert!(pair[0].is_adjacent(pair[1]));
        }
    }

    #[test]
    fn start_equals_goal() {
        let walls: WallSet = WallSet::new();
        let mut finder: PathFinder = PathFinder::new(3);

        let path: Path = finder
            .find_path(&walls, Cell::new(1, 1), Cell::new(1, 1), &[])
            .unwrap();
        assert_eq!(path.get(), &vec![Cell::new(1, 1)]);

        // A waypoint on the starting cell is visited immediately
        let path: Path = finder
            .find_path(&walls, Cell::new(1, 1), Cell::new(1, 1), &[Cell::new(1, 1)])
            .unwrap();
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn sealed_start_has_no_path() {
        let mut walls: WallSet = WallSet::new();
        walls.insert(Wall::new(Cell::new(0, 0), Side::Right));
        walls.insert(Wall::new(Cell::new(0, 0), Side::Bottom));
        let mut finder: PathFinder = PathFinder::new(2);

        assert!(
            finder
                .find_path(&walls, Cell::new(0, 0), Cell::new(1, 1), &[])
                .is_none()
        );
    }

    #[test]
    fn cycle_through_waypoints() {
        let walls: WallSet = WallSet::new();
        let mut finder: PathFinder = PathFinder::new(3);

        let must_visit: [Cell; 2] = [Cell::new(0, 0), Cell::new(2, 2)];
        let path: Path = finder
            .find_path(&walls, Cell::new(0, 0), Cell::new(0, 0), &must_visit)
            .unwrap();
        // Out to the far corner and back: 8 moves, 9 cells
        assert_eq!(path.len(), 9);
        assert_eq!(path.first(), Some(Cell::new(0, 0)));
        assert_eq!(path.last(), Some(Cell::new(0, 0)));
        assert!(path.contains(Cell::new(2, 2)));
    }

    #[test]
    fn equal_cost_ties_are_deterministic() {
        let mut walls: WallSet = WallSet::new();
        walls.insert(Wall::new(Cell::new(1, 1), Side::Right));
        let mut finder: PathFinder = PathFinder::new(4);

        let first: Path = finder
            .find_path(&walls, Cell::new(0, 0), Cell::new(3, 3), &[])
            .unwrap();
        let second: Path = finder
            .find_path(&walls, Cell::new(0, 0), Cell::new(3, 3), &[])
            .unwrap();
        assert_eq!(first, second);
    }
}
