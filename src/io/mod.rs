//! Task input and output.
//!
//! - **`task_file`**: plain `r t` task lists
//! - **`generator`**: seeded uniform random task sets
//! - **`swf`**: conversion from Standard Workload Format logs

mod generator;
mod swf;
mod task_file;

pub use generator::TaskGenerator;
pub use swf::SwfConverter;
pub use task_file::{load_task_set, read_task_file, read_tasks, write_tasks};
