//! Strip scheduler: sort, pack, evaluate.
//!
//! # Algorithm
//!
//! 1. Validate the task records into a [`TaskSet`].
//! 2. Sort by height descending (stable bucket sort).
//! 3. Run the selected packer, timing this phase only.
//! 4. Compare the makespan with the area lower bound.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::PackingReport;
use crate::error::Result;
use crate::models::{Task, TaskSet};
use crate::packing::Algorithm;

/// Input container for one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingRequest {
    /// Task records `(r, t)` in input order.
    pub tasks: Vec<Task>,
    /// Strip width `n`.
    pub strip_width: i64,
    /// Packing algorithm.
    pub algorithm: Algorithm,
    /// Optional cap on FFDH shelves. `None` = grow as needed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_shelves: Option<usize>,
}

impl PackingRequest {
    /// Creates a request using FFDH.
    pub fn new(tasks: Vec<Task>, strip_width: i64) -> Self {
        Self {
            tasks,
            strip_width,
            algorithm: Algorithm::Ffdh,
            max_shelves: None,
        }
    }

    /// Sets the algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Caps the number of FFDH shelves.
    pub fn with_max_shelves(mut self, max_shelves: usize) -> Self {
        self.max_shelves = Some(max_shelves);
        self
    }
}

/// Runs shelf packers on validated task sets.
///
/// # Example
///
/// ```
/// use u_shelf::models::Task;
/// use u_shelf::packing::Algorithm;
/// use u_shelf::scheduler::{PackingRequest, StripScheduler};
///
/// let tasks = vec![Task::new(2, 5), Task::new(2, 4), Task::new(1, 4), Task::new(1, 1)];
/// let request = PackingRequest::new(tasks, 3).with_algorithm(Algorithm::Ffdh);
///
/// let report = StripScheduler::new().schedule_request(&request).unwrap();
/// assert_eq!(report.makespan(), 9.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StripScheduler {
    max_shelves: Option<usize>,
}

impl StripScheduler {
    /// Creates a scheduler with unbounded shelf storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of FFDH shelves.
    pub fn with_max_shelves(mut self, max_shelves: usize) -> Self {
        self.max_shelves = Some(max_shelves);
        self
    }

    /// Configured shelf cap, if any.
    pub fn max_shelves(&self) -> Option<usize> {
        self.max_shelves
    }

    /// Sorts `tasks` and packs them with `algorithm`.
    ///
    /// Sorting happens outside the timed interval.
    pub fn schedule(&self, tasks: &TaskSet, algorithm: Algorithm) -> Result<PackingReport> {
        let sorted = tasks.sorted_by_height_desc();
        self.schedule_sorted(&sorted, algorithm)
    }

    /// Packs a task set that is already in the desired order.
    pub fn schedule_sorted(&self, tasks: &TaskSet, algorithm: Algorithm) -> Result<PackingReport> {
        let packer = algorithm.packer(self.max_shelves);

        let start = Instant::now();
        let outcome = packer.pack(tasks)?;
        let elapsed = start.elapsed();

        log::debug!(
            "{algorithm}: {} tasks on width {} -> makespan {} over {} shelves",
            tasks.len(),
            tasks.strip_width(),
            outcome.makespan,
            outcome.shelf_count
        );

        Ok(PackingReport::new(algorithm, tasks, outcome, elapsed))
    }

    /// Validates and schedules a request.
    ///
    /// The request's own shelf cap takes precedence over the scheduler's.
    pub fn schedule_request(&self, request: &PackingRequest) -> Result<PackingReport> {
        let tasks = TaskSet::new(request.tasks.clone(), request.strip_width)?;
        let scheduler = Self {
            max_shelves: request.max_shelves.or(self.max_shelves),
        };
        scheduler.schedule(&tasks, request.algorithm)
    }

    /// Sorts once and runs every algorithm on the same order.
    pub fn compare(&self, tasks: &TaskSet) -> Result<Vec<PackingReport>> {
        let sorted = tasks.sorted_by_height_desc();
        Algorithm::ALL
            .iter()
            .map(|&algorithm| self.schedule_sorted(&sorted, algorithm))
            .collect()
    }
}
