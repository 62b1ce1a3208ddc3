//! Shared world state for task store BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskSnapshotStore,
    domain::Task,
    services::{TaskStore, TaskStoreResult},
};

/// Store type used by the BDD world.
pub type TestTaskStore = TaskStore<InMemoryTaskSnapshotStore, DefaultClock>;

/// Scenario world for task store behaviour tests.
#[derive(Default)]
pub struct TaskStoreWorld {
    pub store: Option<TestTaskStore>,
    pub task: Option<Task>,
    pub last_result: Option<TaskStoreResult<Task>>,
}

impl TaskStoreWorld {
    /// Returns the opened store.
    pub fn store(&self) -> Result<&TestTaskStore, eyre::Report> {
        self.store
            .as_ref()
            .ok_or_else(|| eyre::eyre!("task store has not been opened in scenario world"))
    }

    /// Returns the task the scenario is working on.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }

    /// Records a mutation result, tracking the returned task on success.
    pub fn record(&mut self, result: TaskStoreResult<Task>) {
        if let Ok(ref task) = result {
            self.task = Some(task.clone());
        }
        self.last_result = Some(result);
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskStoreWorld {
    TaskStoreWorld::default()
}

/// Opens a store over an in-memory snapshot store.
pub fn open_store(
    snapshots: InMemoryTaskSnapshotStore,
    seed: taskboard::task::services::SeedPolicy,
) -> Result<TestTaskStore, eyre::Report> {
    run_async(TaskStore::open(
        Arc::new(snapshots),
        Arc::new(DefaultClock),
        seed,
    ))
    .map_err(|err| eyre::eyre!("open task store: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
