/*
figures.rs

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

//! Figures that can be placed on the cells of a task.

use serde::{Deserialize, Serialize};
use strum_macros::FromRepr;

/// Kind of a figure placed on a cell.
///
/// Each kind has a fixed integer code, which is the value stored in the
/// saved task record. A theme restricts which kinds are allowed on its
/// tasks.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(i32)]
pub enum FigureKind {
    /// Filled circle, one of the two alternating marks of cyclic tasks.
    FilledPoint = 1,

    /// Open circle, the other alternating mark of cyclic tasks.
    OpenPoint = 2,

    /// Starting cell of an open task.
    Start = 3,

    /// Ending cell of an open task.
    End = 4,

    /// Numbered waypoint of an ordered task.
    Waypoint = 5,

    /// Cross marker interleaved with the waypoints.
    Cross = 6,

    /// Fully shaded cell.
    FilledCell = 7,
}

impl FigureKind {
    /// Integer code of the kind, as stored in the task record.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Return the kind for the given code, or None for an unknown code.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::from_repr(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        assert_eq!(FigureKind::FilledPoint.code(), 1);
        assert_eq!(FigureKind::FilledCell.code(), 7);
        assert_eq!(FigureKind::from_code(2), Some(FigureKind::OpenPoint));
        assert_eq!(FigureKind::from_code(7), Some(FigureKind::FilledCell));
        assert_eq!(FigureKind::from_code(0), None);
        assert_eq!(FigureKind::from_code(8), None);
    }
}
