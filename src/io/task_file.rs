//! Plain-text task files.
//!
//! One task per line: `r t` (width, then height), whitespace separated.
//! Blank lines and everything after `#` are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::{Task, TaskSet};

/// Reads task records from `reader`.
///
/// Values are not range-checked here; that happens in [`TaskSet::new`].
pub fn read_tasks<R: BufRead>(reader: R) -> Result<Vec<Task>> {
    let mut tasks = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let content = line.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        let fields: Vec<&str> = content.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(Error::Parse {
                line: idx + 1,
                message: format!("expected 2 fields 'r t', found {}", fields.len()),
            });
        }

        let width = parse_field(fields[0], idx + 1, "width")?;
        let height = parse_field(fields[1], idx + 1, "height")?;
        tasks.push(Task::new(width, height));
    }

    Ok(tasks)
}

/// Reads task records from a file.
pub fn read_task_file(path: impl AsRef<Path>) -> Result<Vec<Task>> {
    let file = File::open(path)?;
    read_tasks(BufReader::new(file))
}

/// Reads and validates a task file for strip width `strip_width`.
pub fn load_task_set(path: impl AsRef<Path>, strip_width: i64) -> Result<TaskSet> {
    let tasks = read_task_file(path)?;
    TaskSet::new(tasks, strip_width)
}

/// Writes tasks as `r t` lines.
pub fn write_tasks<W: Write>(mut writer: W, tasks: &[Task]) -> Result<()> {
    for task in tasks {
        writeln!(writer, "{} {}", task.width, task.height)?;
    }
    writer.flush()?;
    Ok(())
}

fn parse_field(raw: &str, line: usize, name: &str) -> Result<i64> {
    raw.parse().map_err(|_| Error::Parse {
        line,
        message: format!("invalid {name} '{raw}'"),
    })
}
