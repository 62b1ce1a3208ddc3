//! When steps for task store BDD scenarios.

use super::world::{TaskStoreWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::task::services::{CreateTaskRequest, TransitionTaskRequest, UpdateTaskRequest};

#[when(r#"a task titled "{title}" is created"#)]
fn create_task(world: &mut TaskStoreWorld, title: String) -> Result<(), eyre::Report> {
    let result = run_async(world.store()?.create(CreateTaskRequest::new(title)));
    world.record(result);
    Ok(())
}

#[when(r#"the task is moved to "{status}""#)]
fn move_task(world: &mut TaskStoreWorld, status: String) -> Result<(), eyre::Report> {
    let request = TransitionTaskRequest::new(world.task()?.id(), status);
    let result = run_async(world.store()?.transition_status(request));
    world.record(result);
    Ok(())
}

#[when(r#"the task title is changed to "{title}""#)]
fn rename_task(world: &mut TaskStoreWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task()?.id();
    let result = run_async(
        world
            .store()?
            .update(id, UpdateTaskRequest::new().with_title(title)),
    );
    world.record(result);
    Ok(())
}

#[when("the task is deleted")]
fn delete_task(world: &mut TaskStoreWorld) -> Result<(), eyre::Report> {
    let id = world.task()?.id();
    let result = run_async(world.store()?.delete(id));
    world.record(result);
    Ok(())
}
