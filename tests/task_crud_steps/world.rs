//! Shared world state for task CRUD BDD scenarios.

use rstest::fixture;
use taskbook::task::adapters::MemoryStorage;
use taskbook::task::domain::{Task, TaskDraft, TaskId};
use taskbook::task::services::{StoreHandle, StoreScope, TaskStore};

/// Scenario world for task CRUD behaviour tests.
///
/// Given steps install a store scope seeded for the scenario; later steps
/// operate through handles requested from that scope.
pub struct TaskCrudWorld {
    pub scope: Option<StoreScope>,
}

impl TaskCrudWorld {
    /// Creates a world with no store scope installed yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { scope: None }
    }

    /// Installs a scope over a store seeded with the given collection.
    pub fn seed(&mut self, tasks: Vec<Task>) {
        self.scope = Some(StoreScope::new(TaskStore::with_tasks(
            Box::new(MemoryStorage::new()),
            tasks,
        )));
    }

    /// Requests a handle from the active scope.
    pub fn handle(&self) -> Result<StoreHandle, eyre::Report> {
        let scope = self
            .scope
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no store scope installed in scenario world"))?;
        Ok(scope.handle())
    }
}

impl Default for TaskCrudWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a seeded task for scenario setup.
#[must_use]
pub fn seeded_task(id: &str, title: &str) -> Task {
    Task::from_draft(TaskId::from(id), TaskDraft::new(title))
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskCrudWorld {
    TaskCrudWorld::default()
}
