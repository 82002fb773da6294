//! Standard Workload Format (SWF) conversion.
//!
//! Turns a parallel workload log into task records. Field 4 (`run_time`)
//! becomes the height and field 5 (`num_procs`) the width. Lines starting
//! with `;` are header comments. Lines with only two columns are read as
//! `run_time num_procs`. Records with non-positive values are skipped and
//! heights are clamped to `MAX_HEIGHT`.
//!
//! # Reference
//! Feitelson, Tsafrir & Krakov (2014), "Experience with using the
//! Parallel Workloads Archive"

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;
use crate::models::{Task, MAX_HEIGHT};

/// SWF log reader.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwfConverter {
    limit: Option<usize>,
}

impl SwfConverter {
    /// Creates a converter that reads the whole log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops after `limit` accepted jobs. A limit of 0 reads the whole log.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = (limit > 0).then_some(limit);
        self
    }

    /// Converts a log from `reader`.
    pub fn convert<R: BufRead>(&self, reader: R) -> Result<Vec<Task>> {
        let mut tasks = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            if self.limit.is_some_and(|limit| tasks.len() >= limit) {
                break;
            }

            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') {
                continue;
            }

            match parse_job(line) {
                Some(task) => tasks.push(task),
                None => log::warn!("skipping SWF line {}: {line}", idx + 1),
            }
        }

        Ok(tasks)
    }

    /// Converts a log file.
    pub fn convert_file(&self, path: impl AsRef<Path>) -> Result<Vec<Task>> {
        let file = File::open(path)?;
        self.convert(BufReader::new(file))
    }
}

fn parse_job(line: &str) -> Option<Task> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let (run_time, num_procs) = if fields.len() >= 5 {
        (field(&fields, 3)?, field(&fields, 4)?)
    } else if fields.len() >= 2 {
        (field(&fields, 0)?, field(&fields, 1)?)
    } else {
        return None;
    };

    if run_time <= 0 || num_procs <= 0 {
        return None;
    }
    Some(Task::new(num_procs, run_time.min(MAX_HEIGHT)))
}

fn field(fields: &[&str], idx: usize) -> Option<i64> {
    fields.get(idx)?.parse().ok()
}
