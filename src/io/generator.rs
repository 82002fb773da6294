//! Random task generation.
//!
//! Widths are uniform on `[1, n]` and heights uniform on `[1, max_height]`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::{Task, MAX_HEIGHT};

/// Uniform random task generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskGenerator {
    /// Strip width `n`; widths are drawn from `[1, n]`.
    pub strip_width: i64,
    /// Heights are drawn from `[1, max_height]`.
    pub max_height: i64,
}

impl TaskGenerator {
    /// Creates a generator for strip width `strip_width`.
    pub fn new(strip_width: i64) -> Self {
        Self {
            strip_width: strip_width.max(1),
            max_height: MAX_HEIGHT,
        }
    }

    /// Sets the largest height, clamped to `[1, MAX_HEIGHT]`.
    pub fn with_max_height(mut self, max_height: i64) -> Self {
        self.max_height = max_height.clamp(1, MAX_HEIGHT);
        self
    }

    /// Draws `count` tasks from `rng`.
    pub fn generate<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<Task> {
        (0..count)
            .map(|_| {
                Task::new(
                    rng.random_range(1..=self.strip_width),
                    rng.random_range(1..=self.max_height),
                )
            })
            .collect()
    }

    /// Draws `count` tasks from a generator seeded with `seed`.
    pub fn generate_seeded(&self, count: usize, seed: u64) -> Vec<Task> {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.generate(count, &mut rng)
    }
}
