//! Parallel task model.
//!
//! A parallel task holds `width` processing units concurrently for
//! `height` time units. In the strip-packing view it is a rectangle
//! that must be placed on a strip of fixed total width.
//!
//! # Reference
//! Coffman et al. (1980), "Performance Bounds for Level-Oriented
//! Two-Dimensional Packing Algorithms"

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::packing::sort_by_height_desc;
use crate::validation::validate_tasks;

/// Largest task height accepted by the descending-height sort.
pub const MAX_HEIGHT: i64 = 100;

/// Largest accepted strip width. Keeps every width sum and area product
/// of a validated [`TaskSet`] far from `i64` overflow.
pub const MAX_STRIP_WIDTH: i64 = i32::MAX as i64;

/// A rigid parallel task: `width` units held for `height` time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    /// Number of processing units required concurrently (`r`).
    pub width: i64,
    /// Processing time (`t`).
    pub height: i64,
}

impl Task {
    /// Creates a task. Values are checked when the task joins a [`TaskSet`].
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    /// Area `width * height`.
    #[inline]
    pub fn area(&self) -> i64 {
        self.width * self.height
    }
}

impl From<(i64, i64)> for Task {
    fn from((width, height): (i64, i64)) -> Self {
        Self::new(width, height)
    }
}

/// A validated, ordered collection of tasks bound to one strip width.
///
/// Construction runs [`validate_tasks`], so every task in a `TaskSet`
/// has `1 <= width <= strip_width <= MAX_STRIP_WIDTH` and
/// `1 <= height <= MAX_HEIGHT`, and the set is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskSet {
    tasks: Vec<Task>,
    strip_width: i64,
}

impl TaskSet {
    /// Validates `tasks` against `strip_width` and builds the set.
    ///
    /// # Errors
    /// [`Error::Validation`](crate::Error::Validation) listing every
    /// problem found.
    pub fn new(tasks: Vec<Task>, strip_width: i64) -> Result<Self> {
        validate_tasks(&tasks, strip_width)?;
        Ok(Self { tasks, strip_width })
    }

    /// Strip width `n`.
    #[inline]
    pub fn strip_width(&self) -> i64 {
        self.strip_width
    }

    /// Tasks in their current order.
    #[inline]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks `m`.
    #[inline]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Always `false` for a validated set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Sum of task areas, accumulated in `i128`.
    pub fn total_area(&self) -> i128 {
        self.tasks.iter().map(|t| i128::from(t.area())).sum()
    }

    /// Tallest task height.
    pub fn max_height(&self) -> i64 {
        self.tasks.iter().map(|t| t.height).max().unwrap_or(0)
    }

    /// Reorders the tasks by height descending, stable on ties.
    pub fn sort_by_height_desc(&mut self) {
        self.tasks = sort_by_height_desc(&self.tasks);
    }

    /// Returns a sorted copy, leaving `self` untouched.
    pub fn sorted_by_height_desc(&self) -> Self {
        Self {
            tasks: sort_by_height_desc(&self.tasks),
            strip_width: self.strip_width,
        }
    }

    /// Whether heights are non-increasing.
    pub fn is_sorted_by_height_desc(&self) -> bool {
        self.tasks.windows(2).all(|w| w[0].height >= w[1].height)
    }

    /// Consumes the set, returning the tasks.
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }
}
