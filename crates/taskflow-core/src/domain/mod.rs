//! Domain model (ids, priority, task records, stats, errors).

pub mod errors;
pub mod ids;
pub mod priority;
pub mod stats;
pub mod task;

pub use errors::ValidationError;
pub use ids::{ParseTaskIdError, TaskId};
pub use priority::Priority;
pub use stats::TaskStats;
pub use task::Task;
