//! Next-Fit Decreasing Height.
//!
//! # Algorithm
//! Keep one open shelf. If the next task does not fit in its remaining
//! width, close it for good and start a new shelf on top. The makespan is
//! the sum of closed shelf heights plus the open shelf's height.
//!
//! # Complexity
//! O(m) time, O(1) extra space.
//!
//! # Reference
//! Coffman et al. (1980), Section 2: NFDH, `NFDH(L) <= 2 OPT(L) + h_max`

use super::{Algorithm, PackingOutcome, ShelfPacker};
use crate::error::Result;
use crate::models::{Task, TaskSet};

/// NFDH packer. Never reopens a closed shelf.
#[derive(Debug, Clone, Copy, Default)]
pub struct NextFitPacker;

impl NextFitPacker {
    /// Creates the packer.
    pub fn new() -> Self {
        Self
    }
}

impl ShelfPacker for NextFitPacker {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Nfdh
    }

    fn pack(&self, tasks: &TaskSet) -> Result<PackingOutcome> {
        Ok(next_fit(tasks.tasks(), tasks.strip_width()))
    }
}

/// Packs `tasks` in the given order with next-fit shelves.
pub fn next_fit(tasks: &[Task], strip_width: i64) -> PackingOutcome {
    let mut closed_height = 0;
    let mut used_width = 0;
    let mut level_height = 0;
    let mut shelf_count = 0;

    for task in tasks {
        if shelf_count == 0 || task.width > strip_width - used_width {
            closed_height += level_height;
            used_width = 0;
            level_height = 0;
            shelf_count += 1;
        }
        used_width += task.width;
        level_height = level_height.max(task.height);
    }

    PackingOutcome {
        makespan: closed_height + level_height,
        shelf_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_tasks_share_a_shelf() {
        // n = 2: (1,3) and (1,3) fill one shelf, (2,1) needs a new one.
        let tasks = [Task::new(1, 3), Task::new(1, 3), Task::new(2, 1)];
        let outcome = next_fit(&tasks, 2);
        assert_eq!(outcome.makespan, 4);
        assert_eq!(outcome.shelf_count, 2);
    }

    #[test]
    fn test_never_reopens_shelf() {
        // The gap beside (2,5) is never used again; (1,1) opens a third shelf.
        let tasks = [
            Task::new(2, 5),
            Task::new(2, 4),
            Task::new(1, 2),
            Task::new(1, 1),
        ];
        let outcome = next_fit(&tasks, 3);
        assert_eq!(outcome.makespan, 10);
        assert_eq!(outcome.shelf_count, 3);
    }

    #[test]
    fn test_each_task_full_width() {
        let tasks = [Task::new(4, 3), Task::new(4, 2), Task::new(4, 1)];
        let outcome = next_fit(&tasks, 4);
        assert_eq!(outcome.makespan, 6);
        assert_eq!(outcome.shelf_count, 3);
    }

    #[test]
    fn test_full_width_at_i64_max() {
        let tasks = [Task::new(i64::MAX, 1), Task::new(i64::MAX, 1)];
        let outcome = next_fit(&tasks, i64::MAX);
        assert_eq!(outcome.makespan, 2);
        assert_eq!(outcome.shelf_count, 2);
    }

    #[test]
    fn test_no_tasks() {
        let outcome = next_fit(&[], 4);
        assert_eq!(outcome.makespan, 0);
        assert_eq!(outcome.shelf_count, 0);
    }

    #[test]
    fn test_packer_trait() {
        let set = TaskSet::new(vec![Task::new(1, 2), Task::new(1, 2)], 2).unwrap();
        let packer = NextFitPacker::new();
        assert_eq!(packer.algorithm(), Algorithm::Nfdh);
        assert_eq!(packer.pack(&set).unwrap().makespan, 2);
    }
}
