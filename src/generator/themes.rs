/*
themes.rs

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

//! Task themes and complexity levels.
//!
//! A theme names a category of tasks: whether the route is a closed round
//! trip or an open start-to-end walk, which figure kinds the theme allows on
//! its cells, and how the generator lays the figures out. The complexity
//! level selects the grid size.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use strum_macros::FromRepr;

use super::figures::FigureKind;

/// Task complexity level.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(i32)]
pub enum Complexity {
    Easy,
    #[default]
    Medium,
    Hard,
    Extreme,
}

impl Complexity {
    /// Width and height of the grid for this complexity level.
    pub fn grid_size(self) -> usize {
        match self {
            Complexity::Easy => 6,
            Complexity::Medium => 8,
            Complexity::Hard => 10,
            Complexity::Extreme => 16,
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Complexity::Easy => write!(f, "Easy"),
            Complexity::Medium => write!(f, "Medium"),
            Complexity::Hard => write!(f, "Hard"),
            Complexity::Extreme => write!(f, "Extreme"),
        }
    }
}

/// Route category of a task.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// The solution visits every figure and returns to its starting cell.
    Closed,

    /// The solution walks from a start figure to an end figure.
    Open,
}

impl TaskKind {
    /// Name of the category, as stored in the task record.
    pub fn name(self) -> &'static str {
        match self {
            TaskKind::Closed => "closed",
            TaskKind::Open => "open",
        }
    }

    /// Return the category for the given record name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "closed" => Some(TaskKind::Closed),
            "open" => Some(TaskKind::Open),
            _ => None,
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Figure layout that the generator follows for a theme.
#[derive(Debug, Clone, PartialEq)]
pub enum FigurePlan {
    /// Alternate filled and open points, for closed round-trip themes.
    AlternatingPoints { count: usize },

    /// A single start/end pair.
    StartEnd,

    /// Start and end markers with waypoints and interleaved crosses.
    WaypointTrail { waypoints: usize, crosses: usize },
}

impl FigurePlan {
    /// Return the figure kinds to place, in placement order.
    pub fn kinds(&self) -> Vec<FigureKind> {
        match self {
            FigurePlan::AlternatingPoints { count } => (0..*count)
                .map(|i| {
                    if i % 2 == 0 {
                        FigureKind::FilledPoint
                    } else {
                        FigureKind::OpenPoint
                    }
                })
                .collect(),
            FigurePlan::StartEnd => vec![FigureKind::Start, FigureKind::End],
            FigurePlan::WaypointTrail { waypoints, crosses } => {
                let (waypoints, crosses): (usize, usize) = (*waypoints, *crosses);
                let mut kinds: Vec<FigureKind> = Vec::with_capacity(waypoints + crosses + 2);
                kinds.push(FigureKind::Start);
                for i in 0..waypoints.max(crosses) {
                    if i < waypoints {
                        kinds.push(FigureKind::Waypoint);
                    }
                    if i < crosses {
                        kinds.push(FigureKind::Cross);
                    }
                }
                kinds.push(FigureKind::End);
                kinds
            }
        }
    }
}

/// Theme parameters.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name.
    pub name: String,

    /// Whether the theme's tasks are closed round trips or open walks.
    pub kind: TaskKind,

    /// Figure kinds allowed on the theme's tasks.
    pub allowed_kinds: Vec<FigureKind>,

    /// Figure layout for the generator.
    pub plan: FigurePlan,
}

impl Theme {
    /// Create a [`Theme`] object.
    pub fn new(name: &str, kind: TaskKind, allowed_kinds: &[FigureKind], plan: FigurePlan) -> Self {
        Self {
            name: String::from(name),
            kind,
            allowed_kinds: allowed_kinds.to_vec(),
            plan,
        }
    }

    /// Whether the theme allows the given figure kind on its tasks.
    pub fn allows(&self, kind: FigureKind) -> bool {
        self.allowed_kinds.contains(&kind)
    }
}

/// Return the theme list, indexed by name.
pub fn theme_map() -> HashMap<String, Theme> {
    let mut themes: HashMap<String, Theme> = HashMap::new();

    // For developers: add your new theme to the list.
    let t: Theme = Theme::new(
        "Alternating circles",
        TaskKind::Closed,
        &[FigureKind::FilledPoint, FigureKind::OpenPoint],
        FigurePlan::AlternatingPoints { count: 6 },
    );
    themes.insert(String::from(&t.name), t);

    let t: Theme = Theme::new(
        "Point to point",
        TaskKind::Open,
        &[FigureKind::Start, FigureKind::End],
        FigurePlan::StartEnd,
    );
    themes.insert(String::from(&t.name), t);

    let t: Theme = Theme::new(
        "Ordered waypoints",
        TaskKind::Open,
        &[
            FigureKind::Start,
            FigureKind::End,
            FigureKind::Waypoint,
            FigureKind::Cross,
        ],
        FigurePlan::WaypointTrail {
            waypoints: 3,
            crosses: 2,
        },
    );
    themes.insert(String::from(&t.name), t);

    themes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_size_table() {
        assert_eq!(Complexity::Easy.grid_size(), 6);
        assert_eq!(Complexity::Medium.grid_size(), 8);
        assert_eq!(Complexity::Hard.grid_size(), 10);
        assert_eq!(Complexity::Extreme.grid_size(), 16);
        assert_eq!(Complexity::from_repr(2), Some(Complexity::Hard));
    }

    #[test]
    fn task_kind_names() {
        assert_eq!(TaskKind::Closed.name(), "closed");
        assert_eq!(TaskKind::from_name("open"), Some(TaskKind::Open));
        assert_eq!(TaskKind::from_name("curved"), None);
    }

    #[test]
    fn plan_kind_sequences() {
        let kinds: Vec<FigureKind> = FigurePlan::AlternatingPoints { count: 5 }.kinds();
        assert_eq!(
            kinds,
            vec![
                FigureKind::FilledPoint,
                FigureKind::OpenPoint,
                FigureKind::FilledPoint,
                FigureKind::OpenPoint,
                FigureKind::FilledPoint,
            ]
        );

        let kinds: Vec<FigureKind> = FigurePlan::WaypointTrail {
            waypoints: 2,
            crosses: 1,
        }
        .kinds();
        assert_eq!(
            kinds,
            vec![
                FigureKind::Start,
                FigureKind::Waypoint,
                FigureKind::Cross,
                FigureKind::Waypoint,
                FigureKind::End,
            ]
        );
    }

    #[test]
    fn themes_are_consistent_with_their_plans() {
        for theme in theme_map().values() {
            for kind in theme.plan.kinds() {
                assert!(theme.allows(kind), "{}: {:?}", theme.name, kind);
            }
        }
    }
}
