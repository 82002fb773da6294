//! Level-oriented strip packing.
//!
//! Provides the first-fit search tree and the two shelf packers. The
//! descending-height sort is reached through `TaskSet`.
//!
//! # Usage
//!
//! ```
//! use u_shelf::models::{Task, TaskSet};
//! use u_shelf::packing::{Algorithm, ShelfPacker};
//!
//! let mut tasks = TaskSet::new(vec![Task::new(2, 1), Task::new(1, 3), Task::new(1, 3)], 2).unwrap();
//! tasks.sort_by_height_desc();
//!
//! let packer = Algorithm::Nfdh.packer(None);
//! assert_eq!(packer.pack(&tasks).unwrap().makespan, 4);
//! ```
//!
//! # References
//!
//! - Coffman, Garey, Johnson & Tarjan (1980), "Performance Bounds for
//!   Level-Oriented Two-Dimensional Packing Algorithms"
//! - Turek, Wolf & Yu (1992), "Approximate Algorithms for Scheduling
//!   Parallelizable Tasks"

mod ffdh;
mod first_fit_index;
mod nfdh;
mod sort;

pub use ffdh::FirstFitPacker;
pub use first_fit_index::FirstFitIndex;
pub use nfdh::{next_fit, NextFitPacker};
pub(crate) use sort::sort_by_height_desc;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::models::TaskSet;

/// Result of one packing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingOutcome {
    /// Total packed height `T(S)`.
    pub makespan: i64,
    /// Shelves opened.
    pub shelf_count: usize,
}

/// A shelf packing algorithm.
///
/// Packers place tasks in the order the [`TaskSet`] holds them. Sort the
/// set by height first to get the decreasing-height variants.
pub trait ShelfPacker: Debug {
    /// Which algorithm this packer implements.
    fn algorithm(&self) -> Algorithm;

    /// Packs the tasks and reports the makespan.
    fn pack(&self, tasks: &TaskSet) -> Result<PackingOutcome>;
}

/// Packing algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Next-Fit Decreasing Height.
    #[serde(rename = "NFDH")]
    Nfdh,
    /// First-Fit Decreasing Height.
    #[serde(rename = "FFDH")]
    Ffdh,
}

impl Algorithm {
    /// Both algorithms, in report order.
    pub const ALL: [Algorithm; 2] = [Algorithm::Nfdh, Algorithm::Ffdh];

    /// Short name ("NFDH", "FFDH").
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Nfdh => "NFDH",
            Algorithm::Ffdh => "FFDH",
        }
    }

    /// Builds a packer. `max_shelves` only applies to FFDH.
    pub fn packer(&self, max_shelves: Option<usize>) -> Box<dyn ShelfPacker> {
        match self {
            Algorithm::Nfdh => Box::new(NextFitPacker::new()),
            Algorithm::Ffdh => {
                let packer = FirstFitPacker::new();
                match max_shelves {
                    Some(limit) => Box::new(packer.with_max_shelves(limit)),
                    None => Box::new(packer),
                }
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NFDH" => Ok(Algorithm::Nfdh),
            "FFDH" => Ok(Algorithm::Ffdh),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}
