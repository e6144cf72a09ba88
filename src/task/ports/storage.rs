//! Storage port for mirroring the task collection to a persistent slot.

use crate::task::domain::Task;
use thiserror::Error;

/// Task persistence contract.
///
/// A strategy backs the store with a single named slot holding the full
/// collection. Neither operation propagates failures past the strategy
/// boundary: implementations absorb I/O and serialisation errors, report
/// them through the logging side channel, and degrade — `load` to "no
/// data", `save` to leaving the previously persisted state unchanged. The
/// in-memory store stays authoritative either way.
pub trait StorageStrategy: Send + Sync {
    /// Loads the persisted collection.
    ///
    /// Returns `None` when the slot holds no usable data, whether it is
    /// absent or unreadable; the caller falls back to its seed collection.
    fn load(&self) -> Option<Vec<Task>>;

    /// Persists the full collection, replacing the slot contents.
    fn save(&self, tasks: &[Task]);
}

/// Errors raised inside storage strategy implementations.
///
/// These never cross the [`StorageStrategy`] boundary; adapters use them
/// internally to funnel fallible slot I/O into a single report site.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The slot could not be read or written.
    #[error("slot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The slot contents are not a valid task collection.
    #[error("slot contents are not a valid task collection: {0}")]
    Malformed(#[from] serde_json::Error),
}
