//! Descending-height bucket sort.
//!
//! # Algorithm
//! Counting sort over the bounded height domain `[1, MAX_HEIGHT]`:
//! 1. Count tasks per height.
//! 2. Turn counts into suffix sums (`count[v]` = tasks with height >= v).
//! 3. Scan the input backwards, placing each task at `--count[height]`.
//!
//! Taller tasks end up first, and the backward scan keeps equal-height
//! tasks in input order.
//!
//! # Complexity
//! O(m + MAX_HEIGHT) time, O(m + MAX_HEIGHT) space.

use crate::models::{Task, MAX_HEIGHT};

/// Returns `tasks` ordered by height descending, stable on ties.
///
/// Callers go through [`TaskSet`](crate::models::TaskSet), whose
/// validation guarantees every height lies in `[1, MAX_HEIGHT]`.
///
/// # Panics
/// If any height lies outside `[1, MAX_HEIGHT]`.
pub(crate) fn sort_by_height_desc(tasks: &[Task]) -> Vec<Task> {
    let domain = MAX_HEIGHT as usize;
    let mut count = vec![0usize; domain + 2];

    for task in tasks {
        assert!(
            (1..=MAX_HEIGHT).contains(&task.height),
            "task height {} outside [1, {MAX_HEIGHT}]",
            task.height
        );
        count[task.height as usize] += 1;
    }

    for v in (0..=domain).rev() {
        count[v] += count[v + 1];
    }

    let mut sorted = tasks.to_vec();
    // Slots for height h are [count[h + 1], count[h]); fill them from the
    // top down while scanning backwards.
    for task in tasks.iter().rev() {
        let slot = &mut count[task.height as usize];
        *slot -= 1;
        sorted[*slot] = *task;
    }

    sorted
}
