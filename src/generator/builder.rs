/*
builder.rs

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

//! Build valid tasks by generating candidates until one is accepted.

use log::debug;
use rand::Rng;

use super::random_task::RandomTask;
use super::task::Task;
use super::themes::{Complexity, Theme};
use super::validator::{Rejection, ValidationSettings, Validator};

/// Terminal failure: the attempt budget ran out.
///
/// The [`Rejection`] of the last attempt is kept, so callers can tell a
/// configuration that exhausts the search space
/// ([`Rejection::PlacementExhausted`]) apart from one that never passes
/// validation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationFailed {
    /// Number of attempts that were made.
    pub attempts: usize,

    /// Rejection reason of the last attempt.
    pub last: Rejection,
}

/// Task builder object.
pub struct TaskBuilder {
    /// Candidate generator.
    generator: RandomTask,

    /// Candidate validator.
    validator: Validator,

    /// Theme of the built tasks.
    theme: Theme,

    /// Attempt budget. At least one attempt is always made.
    max_attempts: usize,

    /// Number of attempts consumed by the last build.
    pub attempts: usize,
}

impl TaskBuilder {
    /// Create a [`TaskBuilder`] object.
    pub fn new(theme: &Theme, complexity: Complexity, settings: &ValidationSettings) -> Self {
        Self {
            generator: RandomTask::new(theme, complexity, settings),
            validator: Validator::new(settings),
            theme: theme.clone(),
            max_attempts: settings.max_attempts.max(1),
            attempts: 0,
        }
    }

    /// Generate candidates until one passes validation, and return it with
    /// its solution attached.
    ///
    /// Every rejected candidate is discarded entirely; the method never
    /// returns a partially valid task.
    ///
    /// # Errors
    ///
    /// Once the attempt budget is exhausted, the method returns a
    /// [`GenerationFailed`] error that wraps the last rejection reason.
    pub fn generate_valid<R: Rng>(&mut self, rng: &mut R) -> Result<Task, GenerationFailed> {
        self.attempts = 0;
        loop {
            self.attempts += 1;
            match self.attempt(rng) {
                Ok(task) => {
                    debug!("Attempt {} accepted", self.attempts);
                    return Ok(task);
                }
                Err(reason) => {
                    debug!("Attempt {} rejected: {:?}", self.attempts, reason);
                    if self.attempts >= self.max_attempts {
                        return Err(GenerationFailed {
                            attempts: self.attempts,
                            last: reason,
                        });
                    }
                }
            }
        }
    }

    /// Run one generate-then-validate round.
    fn attempt<R: Rng>(&mut self, rng: &mut R) -> Result<Task, Rejection> {
        let mut task: Task = self.generator.generate(rng)?;
        let path = self.validator.validate(&mut task, &self.theme)?;
        task.solution = Some(path);
        Ok(task)
    }
}
