/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! List the available themes:
//!
//! ```
//! $ rooktask --ls
//! Alternating circles (closed)
//! Ordered waypoints (open)
//! Point to point (open)
//! ```
//!
//! Generate three easy tasks for the "Point to point" theme and save them:
//!
//! ```
//! $ rooktask -t "Point to point" -c easy -n 3 -o tasks.json
//! ```
//!
//! The same command with the same `--seed` value generates the same tasks
//! again, which is handy when reporting generation issues.

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use crate::config::COPYRIGHT_NOTICE;
use crate::generator::builder::TaskBuilder;
use crate::generator::task::Task;
use crate::generator::themes;
use crate::generator::validator::ValidationSettings;
use crate::saver::tasks::SaverTasks;

/// Generate rook tasks with a single solution.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE, ignore_errors = true)]
struct Args {
    /// List the themes
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Name of the theme to generate tasks for
    #[arg(short, long, group = "generate")]
    theme: Option<String>,

    /// Complexity level for the tasks
    #[arg(value_enum, short, long, default_value_t=themes::Complexity::Medium, requires = "generate")]
    complexity: themes::Complexity,

    /// Number of tasks to generate
    #[arg(short = 'n', long, default_value_t = 1, requires = "generate")]
    count: usize,

    /// Seed for the random generator, for reproducible runs
    #[arg(short, long, requires = "generate")]
    seed: Option<u64>,

    /// File to add the generated tasks to, instead of printing them
    #[arg(short, long, requires = "generate")]
    output: Option<PathBuf>,

    /// Print some statistics after generating the tasks
    #[arg(short = 'm', long, default_value_t = false, requires = "generate")]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let theme_hash: HashMap<String, themes::Theme> = themes::theme_map();

    //
    // List the themes
    //
    if args.ls {
        let mut names: Vec<&String> = theme_hash.keys().collect();
        names.sort_unstable();
        for name in names {
            println!("{} ({})", name, theme_hash[name].kind);
        }
        return 0;
    }

    //
    // Generate the requested tasks
    //
    let Some(theme_name) = args.theme else {
        eprintln!("Nothing to do. Use --ls to list the themes, or --theme to generate tasks.");
        return 2;
    };
    let Some(theme) = theme_hash.get(&theme_name) else {
        eprintln!("Unknown theme {theme_name}. Use --ls to list the available themes.");
        return 1;
    };

    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let settings: ValidationSettings = ValidationSettings::default();
    let mut builder: TaskBuilder = TaskBuilder::new(theme, args.complexity, &settings);

    let mut tasks: Vec<Task> = Vec::with_capacity(args.count);
    let mut attempts: usize = 0;
    let mut failures: usize = 0;
    for i in 0..args.count {
        debug!("Task {i}");
        match builder.generate_valid(&mut rng) {
            Ok(task) => {
                attempts += builder.attempts;
                tasks.push(task);
            }
            Err(failed) => {
                attempts += failed.attempts;
                failures += 1;
                eprintln!(
                    "Task {i}: no valid task after {} attempts, last rejection: {:?}",
                    failed.attempts, failed.last
                );
            }
        }
    }

    let generated: usize = tasks.len();
    let ret: u8 = if generated == args.count { 0 } else { 1 };

    //
    // Print the records, or add them to the output file
    //
    match args.output {
        Some(output) => {
            let saver: SaverTasks = SaverTasks::new(output);
            let mut saved: Vec<Task> = match saver.get_tasks() {
                Ok(t) => t,
                Err(error) => {
                    eprintln!("Cannot read the saved tasks: {error}");
                    return 1;
                }
            };
            saved.append(&mut tasks);
            if let Err(error) = saver.save_tasks(&saved) {
                eprintln!("Cannot save the tasks: {error}");
                return 1;
            }
        }
        None => match serde_json::to_string_pretty(&tasks) {
            Ok(json) => println!("{json}"),
            Err(error) => {
                eprintln!("Cannot serialize the tasks: {error}");
                return 1;
            }
        },
    }

    // Print some stats
    if args.summary {
        println!(
            "
 tasks generated = {generated}
        failures = {failures}
  total attempts = {attempts}
average attempts = {}",
            attempts / args.count.max(1)
        );
    }
    ret
}
