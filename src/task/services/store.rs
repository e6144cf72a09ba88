//! The authoritative in-memory task store.

use crate::task::domain::{Task, TaskDraft, TaskId, TaskPatch, default_tasks};
use crate::task::ports::StorageStrategy;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Owner of the ordered task collection.
///
/// The store holds the only mutable copy of the collection and mirrors it
/// to the injected storage strategy after every effective mutation, always
/// writing the complete collection. The strategy is fixed at construction
/// and never switched at runtime.
///
/// Mutations run synchronously to completion under the collection lock: a
/// read issued after a mutation returns observes the new collection, never
/// a partially applied one. Mutation operations have no failure channel —
/// persistence errors are absorbed and reported inside the strategy, and a
/// missing id is a silent no-op.
pub struct TaskStore {
    tasks: RwLock<Vec<Task>>,
    storage: Box<dyn StorageStrategy>,
}

impl TaskStore {
    /// Creates a store initialised from the strategy's persisted data,
    /// falling back to the default seed when the strategy yields nothing.
    #[must_use]
    pub fn new(storage: Box<dyn StorageStrategy>) -> Self {
        let tasks = storage.load().unwrap_or_else(default_tasks);
        Self {
            tasks: RwLock::new(tasks),
            storage,
        }
    }

    /// Creates a store from an explicitly injected collection, bypassing
    /// the strategy's `load` entirely.
    ///
    /// Later mutations still save through the given strategy; pair with a
    /// volatile strategy for fully deterministic behaviour.
    #[must_use]
    pub fn with_tasks(storage: Box<dyn StorageStrategy>, tasks: Vec<Task>) -> Self {
        Self {
            tasks: RwLock::new(tasks),
            storage,
        }
    }

    /// Returns a snapshot of the collection in insertion order.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.read_tasks().clone()
    }

    /// Appends a new task built from the draft, under a freshly generated
    /// unique identifier, and saves the collection.
    pub fn create(&self, draft: TaskDraft) {
        let mut tasks = self.write_tasks();
        tasks.push(Task::from_draft(TaskId::generate(), draft));
        self.storage.save(&tasks);
    }

    /// Merges the patch into the task with the given id and saves the
    /// collection. A missing id is a silent no-op and triggers no save.
    pub fn update(&self, id: &TaskId, patch: TaskPatch) {
        let mut tasks = self.write_tasks();
        if let Some(task) = tasks.iter_mut().find(|task| task.id() == id) {
            task.apply(patch);
            self.storage.save(&tasks);
        }
    }

    /// Removes the task with the given id, preserving the order of the
    /// remaining tasks, and saves the collection. A missing id is a silent
    /// no-op and triggers no save.
    pub fn delete(&self, id: &TaskId) {
        let mut tasks = self.write_tasks();
        let len_before = tasks.len();
        tasks.retain(|task| task.id() != id);
        if tasks.len() != len_before {
            self.storage.save(&tasks);
        }
    }

    /// Returns the task with the given id, if any. Linear scan.
    #[must_use]
    pub fn find_by_id(&self, id: &TaskId) -> Option<Task> {
        self.read_tasks()
            .iter()
            .find(|task| task.id() == id)
            .cloned()
    }

    // A poisoned lock still holds a fully applied collection; mutations
    // never unwind mid-step.
    fn read_tasks(&self) -> RwLockReadGuard<'_, Vec<Task>> {
        self.tasks.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_tasks(&self) -> RwLockWriteGuard<'_, Vec<Task>> {
        self.tasks.write().unwrap_or_else(PoisonError::into_inner)
    }
}
