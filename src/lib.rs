//! Shelf-based strip packing for parallel task scheduling.
//!
//! Schedules rigid parallel tasks (each holding `r` processors for `t`
//! time units) on `n` processors by packing them as rectangles into a
//! strip of width `n`, minimizing the strip height (makespan).
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Task`, `TaskSet`, `Shelf`, `ShelfTable`
//! - **`validation`**: Ingestion checks (widths, heights, empty sets)
//! - **`packing`**: Descending-height sort, `FirstFitIndex`, NFDH and FFDH
//! - **`scheduler`**: `StripScheduler`, lower bound and epsilon evaluation
//! - **`io`**: Task files, random generation, SWF workload conversion
//!
//! # References
//!
//! - Coffman, Garey, Johnson & Tarjan (1980), "Performance Bounds for
//!   Level-Oriented Two-Dimensional Packing Algorithms"
//! - Turek, Wolf & Yu (1992), "Approximate Algorithms for Scheduling
//!   Parallelizable Tasks"

pub mod error;
pub mod io;
pub mod models;
pub mod packing;
pub mod scheduler;
pub mod validation;

pub use error::{Error, Result};
