//! Domain model for the task list.
//!
//! The task domain models the task record itself, its status lifecycle,
//! identifier generation, and the fallback seed collection, keeping all
//! persistence concerns outside of the domain boundary.

mod defaults;
mod error;
mod ids;
mod task;

pub use defaults::default_tasks;
pub use error::ParseTaskStatusError;
pub use ids::TaskId;
pub use task::{Task, TaskDraft, TaskPatch, TaskStatus};
