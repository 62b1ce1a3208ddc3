//! Given steps for task store BDD scenarios.

use super::world::{TaskStoreWorld, open_store, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::{
    adapters::memory::InMemoryTaskSnapshotStore,
    services::{CreateTaskRequest, SeedPolicy},
};

#[given("a task store opened with the example seed")]
fn seeded_store(world: &mut TaskStoreWorld) -> Result<(), eyre::Report> {
    world.store = Some(open_store(
        InMemoryTaskSnapshotStore::new(),
        SeedPolicy::Examples,
    )?);
    Ok(())
}

#[given("an empty task store")]
fn empty_store(world: &mut TaskStoreWorld) -> Result<(), eyre::Report> {
    world.store = Some(open_store(
        InMemoryTaskSnapshotStore::new(),
        SeedPolicy::Empty,
    )?);
    Ok(())
}

fn create_existing(world: &mut TaskStoreWorld, request: CreateTaskRequest) -> Result<(), eyre::Report> {
    let created = run_async(world.store()?.create(request)).wrap_err("create scenario task")?;
    world.task = Some(created);
    Ok(())
}

#[given(r#"a task titled "{title}" with description "{description}""#)]
fn task_with_description(
    world: &mut TaskStoreWorld,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    create_existing(
        world,
        CreateTaskRequest::new(title).with_description(description),
    )
}

#[given(r#"a task titled "{title}" without description"#)]
fn task_without_description(world: &mut TaskStoreWorld, title: String) -> Result<(), eyre::Report> {
    create_existing(world, CreateTaskRequest::new(title))
}
