//! Step definitions for task CRUD scenarios.

pub mod given;
pub mod then;
pub mod world;
