//! Strip-packing domain models.
//!
//! Provides the data types shared by the packers: parallel tasks, the
//! validated task set, and the shelf table filled during a packing run.
//!
//! # Domain Mappings
//!
//! | u-shelf | Strip packing | Parallel scheduling |
//! |---------|---------------|---------------------|
//! | Task | Rectangle | Rigid parallel job |
//! | Task width | Rectangle width | Processors held |
//! | Task height | Rectangle height | Run time |
//! | Shelf | Level | Batch started together |
//! | Makespan | Strip height | Completion time |

mod shelf;
mod task;

pub use shelf::{Shelf, ShelfTable};
pub use task::{Task, TaskSet, MAX_HEIGHT, MAX_STRIP_WIDTH};
