//! Strip scheduler and packing quality evaluation.
//!
//! # Algorithm
//!
//! `StripScheduler` sorts a task set by decreasing height, runs NFDH or
//! FFDH on it, and times the packing phase alone.
//!
//! # Quality
//!
//! `PackingQuality` compares the makespan with the area lower bound;
//! `EpsilonSummary` aggregates the gap over repeated runs.
//!
//! # References
//!
//! - Coffman et al. (1980), "Performance Bounds for Level-Oriented
//!   Two-Dimensional Packing Algorithms"
//! - Feitelson & Rudolph (1996), "Toward Convergence in Job Schedulers
//!   for Parallel Supercomputers"

mod quality;
mod strip;

pub use quality::{lower_bound, EpsilonSummary, PackingQuality, PackingReport, LOWER_BOUND_FLOOR};
pub use strip::{PackingRequest, StripScheduler};
