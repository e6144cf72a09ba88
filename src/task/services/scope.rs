//! Scoped access capability handing store operations to consumers.

use super::store::TaskStore;
use crate::task::domain::{Task, TaskDraft, TaskId, TaskPatch};
use std::sync::{Arc, Weak};
use thiserror::Error;

/// Error returned when a handle is requested outside an active store scope.
///
/// This signals a wiring bug — a consumer holding a context that outlived
/// its scope — not a recoverable runtime condition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("task store handle requested outside an active store scope")]
pub struct StoreAccessError;

/// Owns the store for the lifetime of the application tree.
///
/// Constructed once at application start; consumers receive a
/// [`StoreContext`] and request definite handles from it. Dropping the
/// scope ends the store lifetime, after which contexts refuse to hand out
/// handles.
pub struct StoreScope {
    store: Arc<TaskStore>,
}

impl StoreScope {
    /// Creates a scope owning the given store.
    #[must_use]
    pub fn new(store: TaskStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Returns a context to thread into consuming components.
    #[must_use]
    pub fn context(&self) -> StoreContext {
        StoreContext {
            store: Arc::downgrade(&self.store),
        }
    }

    /// Returns a handle directly, for consumers wired inside the scope.
    #[must_use]
    pub fn handle(&self) -> StoreHandle {
        StoreHandle {
            store: Arc::clone(&self.store),
        }
    }
}

/// Cheap-to-clone accessor through which consumers request store handles.
#[derive(Debug, Clone)]
pub struct StoreContext {
    store: Weak<TaskStore>,
}

impl StoreContext {
    /// Requests a definite handle to the store's operations.
    ///
    /// # Errors
    ///
    /// Returns [`StoreAccessError`] when the owning [`StoreScope`] has been
    /// dropped. No degraded or default handle is ever returned.
    pub fn handle(&self) -> Result<StoreHandle, StoreAccessError> {
        self.store
            .upgrade()
            .map(|store| StoreHandle { store })
            .ok_or(StoreAccessError)
    }
}

/// Definite handle exposing the store's operations.
///
/// A handle obtained while its scope was alive stays valid; requesting new
/// handles is what the scope lifetime gates.
#[derive(Clone)]
pub struct StoreHandle {
    store: Arc<TaskStore>,
}

impl StoreHandle {
    /// Returns a snapshot of the collection in insertion order.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.store.tasks()
    }

    /// Creates a task from the draft. See [`TaskStore::create`].
    pub fn create(&self, draft: TaskDraft) {
        self.store.create(draft);
    }

    /// Patches the task with the given id. See [`TaskStore::update`].
    pub fn update(&self, id: &TaskId, patch: TaskPatch) {
        self.store.update(id, patch);
    }

    /// Deletes the task with the given id. See [`TaskStore::delete`].
    pub fn delete(&self, id: &TaskId) {
        self.store.delete(id);
    }

    /// Returns the task with the given id, if any.
    #[must_use]
    pub fn find_by_id(&self, id: &TaskId) -> Option<Task> {
        self.store.find_by_id(id)
    }
}
