//! Packing quality metrics.
//!
//! Compares an achieved makespan against the area lower bound.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan `T(S)` | Total packed height |
//! | Lower bound `T'` | `sum(r_j * t_j) / n` |
//! | Epsilon | `(T(S) - T') / T'` |
//!
//! No schedule can fit more than `n` units of task area into one unit of
//! height, so `T'` bounds every feasible makespan from below.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::models::TaskSet;
use crate::packing::{Algorithm, PackingOutcome};

/// Smallest lower bound used as an epsilon denominator.
pub const LOWER_BOUND_FLOOR: f64 = 1e-9;

/// Area lower bound `T'`, clamped to [`LOWER_BOUND_FLOOR`].
pub fn lower_bound(tasks: &TaskSet) -> f64 {
    let bound = tasks.total_area() as f64 / tasks.strip_width() as f64;
    bound.max(LOWER_BOUND_FLOOR)
}

/// Makespan against the lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackingQuality {
    /// Achieved makespan `T(S)`.
    pub makespan: f64,
    /// Area lower bound `T'`.
    pub lower_bound: f64,
    /// Relative gap `(T(S) - T') / T'`.
    pub epsilon: f64,
}

impl PackingQuality {
    /// Evaluates `makespan` for the given task set.
    pub fn calculate(makespan: i64, tasks: &TaskSet) -> Self {
        let makespan = makespan as f64;
        let lower_bound = lower_bound(tasks);
        Self {
            makespan,
            lower_bound,
            epsilon: (makespan - lower_bound) / lower_bound,
        }
    }

    /// Whether the relative gap is at most `max_epsilon`.
    pub fn within(&self, max_epsilon: f64) -> bool {
        self.epsilon <= max_epsilon
    }
}

/// Full result of one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingReport {
    /// Algorithm used.
    pub algorithm: Algorithm,
    /// Number of tasks packed.
    pub task_count: usize,
    /// Shelves opened.
    pub shelf_count: usize,
    /// Makespan, lower bound and gap.
    pub quality: PackingQuality,
    /// Wall-clock time of the packing phase only.
    pub elapsed: Duration,
}

impl PackingReport {
    /// Assembles a report from a packer outcome.
    pub fn new(
        algorithm: Algorithm,
        tasks: &TaskSet,
        outcome: PackingOutcome,
        elapsed: Duration,
    ) -> Self {
        Self {
            algorithm,
            task_count: tasks.len(),
            shelf_count: outcome.shelf_count,
            quality: PackingQuality::calculate(outcome.makespan, tasks),
            elapsed,
        }
    }

    /// `T(S)`.
    pub fn makespan(&self) -> f64 {
        self.quality.makespan
    }

    /// `T'`.
    pub fn lower_bound(&self) -> f64 {
        self.quality.lower_bound
    }

    /// Relative gap.
    pub fn epsilon(&self) -> f64 {
        self.quality.epsilon
    }
}

impl fmt::Display for PackingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "T(S)={:.6}", self.quality.makespan)?;
        writeln!(f, "T'={:.6}", self.quality.lower_bound)?;
        writeln!(f, "epsilon={:.6}", self.quality.epsilon)?;
        write!(f, "time={:.6}", self.elapsed.as_secs_f64())
    }
}

/// Epsilon statistics over repeated runs of one algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpsilonSummary {
    /// Algorithm summarized.
    pub algorithm: Algorithm,
    /// Number of runs.
    pub runs: usize,
    /// Mean epsilon.
    pub mean: f64,
    /// Population standard deviation of epsilon.
    pub std_dev: f64,
    /// Mean packing time (seconds).
    pub mean_time_secs: f64,
}

impl EpsilonSummary {
    /// Summarizes `reports` per algorithm, in [`Algorithm::ALL`] order.
    ///
    /// Algorithms with no reports are omitted.
    pub fn from_reports(reports: &[PackingReport]) -> Vec<Self> {
        Algorithm::ALL
            .iter()
            .filter_map(|&algorithm| {
                let runs: Vec<&PackingReport> = reports
                    .iter()
                    .filter(|r| r.algorithm == algorithm)
                    .collect();
                if runs.is_empty() {
                    return None;
                }

                let n = runs.len() as f64;
                let mean = runs.iter().map(|r| r.epsilon()).sum::<f64>() / n;
                let variance = runs
                    .iter()
                    .map(|r| (r.epsilon() - mean).powi(2))
                    .sum::<f64>()
                    / n;
                let total_time: f64 = runs.iter().map(|r| r.elapsed.as_secs_f64()).sum();

                Some(Self {
                    algorithm,
                    runs: runs.len(),
                    mean,
                    std_dev: variance.sqrt(),
                    mean_time_secs: total_time / n,
                })
            })
            .collect()
    }

    /// The summary with the smallest mean epsilon.
    pub fn most_accurate(summaries: &[Self]) -> Option<&Self> {
        summaries.iter().min_by(|a, b| a.mean.total_cmp(&b.mean))
    }
}
