//! File-backed durable storage for the task collection.

use crate::task::domain::Task;
use crate::task::ports::{StorageError, StorageStrategy};
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

/// Name of the single slot file inside the data directory.
const SLOT_FILE: &str = "todos.json";

/// Durable storage strategy backed by a JSON slot file.
///
/// The slot holds the full task collection as a JSON array. Ambient
/// filesystem authority is exercised once, when the data directory is
/// opened; all slot I/O goes through the resulting capability.
#[derive(Debug)]
pub struct FileStorage {
    dir: Dir,
}

impl FileStorage {
    /// Opens the data directory holding the slot file.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the directory cannot be opened.
    pub fn open(data_dir: impl AsRef<Utf8Path>) -> Result<Self, StorageError> {
        let dir = Dir::open_ambient_dir(data_dir, ambient_authority())?;
        Ok(Self { dir })
    }

    /// Wraps an already-opened capability directory.
    #[must_use]
    pub const fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }

    fn try_load(&self) -> Result<Option<Vec<Task>>, StorageError> {
        let contents = match self.dir.read_to_string(SLOT_FILE) {
            Ok(contents) => contents,
            // An absent slot is "no data yet", not a failure.
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let tasks = serde_json::from_str(&contents)?;
        Ok(Some(tasks))
    }

    fn try_save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let payload = serde_json::to_string(tasks)?;
        self.dir.write(SLOT_FILE, payload)?;
        Ok(())
    }
}

impl StorageStrategy for FileStorage {
    fn load(&self) -> Option<Vec<Task>> {
        self.try_load().unwrap_or_else(|err| {
            tracing::error!(error = %err, slot = SLOT_FILE, "failed to load tasks from slot");
            None
        })
    }

    fn save(&self, tasks: &[Task]) {
        if let Err(err) = self.try_save(tasks) {
            tracing::error!(error = %err, slot = SLOT_FILE, "failed to save tasks to slot");
        }
    }
}
