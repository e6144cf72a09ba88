//! Storage backend selection.
//!
//! Strategy selection stays outside the store itself: the application reads
//! the mode once, builds the matching strategy here, and injects it into
//! [`crate::task::services::TaskStore`] at construction.

use crate::task::adapters::{FileStorage, MemoryStorage};
use crate::task::ports::{StorageError, StorageStrategy};
use camino::Utf8Path;
use std::fmt;

/// Environment variable naming the storage mode.
pub const STORAGE_MODE_VAR: &str = "TASKBOOK_STORAGE";

/// Persistence mode for the task store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StorageMode {
    /// Durable file-backed slot (the default).
    #[default]
    File,
    /// Volatile in-memory storage.
    Memory,
}

impl StorageMode {
    /// Reads the mode from the [`STORAGE_MODE_VAR`] environment variable.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(STORAGE_MODE_VAR).ok().as_deref())
    }

    /// Maps an environment-provided value to a mode.
    ///
    /// `"memory"` selects the volatile variant; any other value, including
    /// no value at all, selects the durable default.
    #[must_use]
    pub fn from_env_value(value: Option<&str>) -> Self {
        value.map_or(Self::File, |label| {
            if label.trim().eq_ignore_ascii_case("memory") {
                Self::Memory
            } else {
                Self::File
            }
        })
    }

    /// Returns the canonical mode label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Memory => "memory",
        }
    }
}

impl fmt::Display for StorageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Builds the storage strategy for the selected mode.
///
/// # Errors
///
/// Returns [`StorageError::Io`] when the durable variant's data directory
/// cannot be opened.
pub fn storage_for_mode(
    mode: StorageMode,
    data_dir: impl AsRef<Utf8Path>,
) -> Result<Box<dyn StorageStrategy>, StorageError> {
    match mode {
        StorageMode::File => Ok(Box::new(FileStorage::open(data_dir)?)),
        StorageMode::Memory => Ok(Box::new(MemoryStorage::new())),
    }
}
