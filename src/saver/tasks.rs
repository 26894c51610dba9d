/*
tasks.rs

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

//! Save accepted tasks to a JSON file and read them back.
//!
//! The generation engine itself never touches a file: it hands accepted
//! [`Task`] objects over, and this module writes their records out. The
//! saved file is a JSON array of task records, which the grid-rendering and
//! database collaborators consume.

use log::debug;
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::generator::task::Task;

/// Object to save and restore generated tasks.
pub struct SaverTasks {
    /// Absolute path to the tasks file.
    tasks_file: PathBuf,
}

impl SaverTasks {
    /// Create a [`SaverTasks`] object for the given tasks file.
    pub fn new(tasks_file: PathBuf) -> Self {
        debug!("Tasks file: {tasks_file:?}");
        SaverTasks { tasks_file }
    }

    /// Retrieve the saved tasks.
    ///
    /// Return an empty list if the file does not exist yet.
    pub fn get_tasks(&self) -> Result<Vec<Task>, Box<dyn Error>> {
        let file: File;
        match File::open(&self.tasks_file) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(Vec::new()),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let tasks: Vec<Task> = serde_json::from_reader(reader)?;
        Ok(tasks)
    }

    /// Save the provided tasks, replacing the file content.
    pub fn save_tasks(&self, tasks: &[Task]) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.tasks_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, tasks)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the tasks file.
    pub fn delete_tasks(&self) {
        let _ = remove_file(&self.tasks_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::themes::{Complexity, theme_map};
    use std::env;

    #[test]
    fn save_and_restore() {
        let mut path: PathBuf = env::temp_dir();
        path.push(format!("rooktask-saver-test-{}.json", std::process::id()));
        let saver: SaverTasks = SaverTasks::new(path);
        saver.delete_tasks();

        // No file yet: an empty list, not an error
        assert!(saver.get_tasks().unwrap().is_empty());

        let themes = theme_map();
        let task: Task = Task::new(&themes["Point to point"], Complexity::Easy);
        saver.save_tasks(&[task.clone()]).unwrap();

        let restored: Vec<Task> = saver.get_tasks().unwrap();
        assert_eq!(restored, vec![task]);

        saver.delete_tasks();
        assert!(saver.get_tasks().unwrap().is_empty());
    }
}
