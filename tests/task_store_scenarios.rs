//! Behaviour tests for task store operations.

#[path = "task_store_steps/mod.rs"]
mod task_store_steps_defs;

use rstest_bdd_macros::scenario;
use task_store_steps_defs::world::{TaskStoreWorld, world};

#[scenario(
    path = "tests/features/task_store.feature",
    name = "Seed example tasks on first start"
)]
#[tokio::test(flavor = "multi_thread")]
async fn seed_example_tasks(world: TaskStoreWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_store.feature",
    name = "Create a task and mark it done"
)]
#[tokio::test(flavor = "multi_thread")]
async fn create_and_complete_task(world: TaskStoreWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_store.feature",
    name = "Partial update keeps unchanged fields"
)]
#[tokio::test(flavor = "multi_thread")]
async fn partial_update_keeps_fields(world: TaskStoreWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_store.feature",
    name = "Deleting a task twice"
)]
#[tokio::test(flavor = "multi_thread")]
async fn delete_twice(world: TaskStoreWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_store.feature",
    name = "Reject an unknown status"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reject_unknown_status(world: TaskStoreWorld) {
    let _ = world;
}
