//! First-Fit Decreasing Height.
//!
//! # Algorithm
//! For each task, find the earliest-created shelf with enough free width
//! via [`FirstFitIndex`]. If one exists, place the task there. Otherwise
//! open a new shelf at the highest end coordinate of all existing shelves.
//! The makespan is that highest end coordinate after the last task.
//!
//! # Complexity
//! O(m log L) time for m tasks and L shelves, O(L) extra space.
//!
//! # Reference
//! Coffman et al. (1980), Section 3: FFDH, `FFDH(L) <= 1.7 OPT(L) + h_max`

use super::{Algorithm, FirstFitIndex, PackingOutcome, ShelfPacker};
use crate::error::{Error, Result};
use crate::models::{ShelfTable, Task, TaskSet};

/// FFDH packer.
///
/// Shelf storage grows on demand. An optional limit turns "too many
/// shelves" into [`Error::ShelfLimitExceeded`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFitPacker {
    max_shelves: Option<usize>,
}

impl FirstFitPacker {
    /// Creates a packer with unbounded shelf storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of shelves.
    pub fn with_max_shelves(mut self, max_shelves: usize) -> Self {
        self.max_shelves = Some(max_shelves);
        self
    }

    /// Configured shelf limit, if any.
    pub fn max_shelves(&self) -> Option<usize> {
        self.max_shelves
    }

    /// Packs `tasks` in the given order and returns every shelf.
    ///
    /// # Errors
    /// [`Error::ShelfLimitExceeded`] if a new shelf is needed beyond the limit.
    pub fn pack_shelves(&self, tasks: &[Task], strip_width: i64) -> Result<ShelfTable> {
        let mut shelves = ShelfTable::new();
        let mut index = FirstFitIndex::new();

        for task in tasks {
            match index.first_fit(task.width) {
                Some(leaf) => {
                    let shelf = shelves.place(leaf, task.width, task.height);
                    index.update(leaf, shelf.free_width(strip_width));
                }
                None => {
                    if let Some(limit) = self.max_shelves {
                        if shelves.len() >= limit {
                            return Err(Error::ShelfLimitExceeded { limit });
                        }
                    }
                    let y = shelves.top();
                    let opened = shelves.open(task.width, task.height);
                    let leaf = index.push(strip_width - task.width);
                    debug_assert_eq!(opened, leaf);
                    log::trace!("shelf {opened} opened at y={y}");
                }
            }
        }

        Ok(shelves)
    }
}

impl ShelfPacker for FirstFitPacker {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Ffdh
    }

    fn pack(&self, tasks: &TaskSet) -> Result<PackingOutcome> {
        let shelves = self.pack_shelves(tasks.tasks(), tasks.strip_width())?;
        Ok(PackingOutcome {
            makespan: shelves.top(),
            shelf_count: shelves.len(),
        })
    }
}
