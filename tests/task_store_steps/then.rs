//! Then steps for task store BDD scenarios.

use super::world::{TaskStoreWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::task::{domain::TaskStatus, services::ErrorKind};

fn expect_status(actual: TaskStatus, expected: &str) -> Result<(), eyre::Report> {
    let expected_status = TaskStatus::try_from(expected)
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    if actual != expected_status {
        return Err(eyre::eyre!("expected status {expected_status}, found {actual}"));
    }
    Ok(())
}

fn expect_failure(world: &TaskStoreWorld, kind: ErrorKind) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;
    match result {
        Err(err) if err.kind() == kind => Ok(()),
        other => Err(eyre::eyre!("expected {kind:?} failure, got {other:?}")),
    }
}

#[then("the task count is {count:usize}")]
fn task_count_is(world: &TaskStoreWorld, count: usize) -> Result<(), eyre::Report> {
    let tasks = run_async(world.store()?.list_all());
    if tasks.len() != count {
        return Err(eyre::eyre!("expected {count} tasks, found {}", tasks.len()));
    }
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskStoreWorld, status: String) -> Result<(), eyre::Report> {
    expect_status(world.task()?.status(), &status)
}

#[then(r#"the stored task status is "{status}""#)]
fn stored_task_status_is(world: &TaskStoreWorld, status: String) -> Result<(), eyre::Report> {
    let id = world.task()?.id();
    let stored = run_async(world.store()?.find(id))
        .ok_or_else(|| eyre::eyre!("task {id} is no longer stored"))?;
    expect_status(stored.status(), &status)
}

#[then(r#"the task title is "{title}""#)]
fn task_title_is(world: &TaskStoreWorld, title: String) -> Result<(), eyre::Report> {
    let actual = world.task()?.title().as_str();
    if actual != title {
        return Err(eyre::eyre!("expected title {title:?}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the task description is "{description}""#)]
fn task_description_is(world: &TaskStoreWorld, description: String) -> Result<(), eyre::Report> {
    let actual = world.task()?.description();
    if actual != description {
        return Err(eyre::eyre!(
            "expected description {description:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then("the task has no update timestamp")]
fn task_has_no_update_timestamp(world: &TaskStoreWorld) -> Result<(), eyre::Report> {
    if let Some(updated_at) = world.task()?.updated_at() {
        return Err(eyre::eyre!("expected no updatedAt, found {updated_at}"));
    }
    Ok(())
}

#[then("the task update timestamp is not before its creation")]
fn task_update_not_before_creation(world: &TaskStoreWorld) -> Result<(), eyre::Report> {
    let task = world.task()?;
    let updated_at = task
        .updated_at()
        .ok_or_else(|| eyre::eyre!("expected updatedAt to be set"))?;
    if updated_at < task.created_at() {
        return Err(eyre::eyre!(
            "updatedAt {updated_at} precedes createdAt {}",
            task.created_at()
        ));
    }
    Ok(())
}

#[then("the operation succeeds")]
fn operation_succeeds(world: &TaskStoreWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(_)) => Ok(()),
        other => Err(eyre::eyre!("expected success, got {other:?}")),
    }
}

#[then("the operation fails with a not found error")]
fn operation_fails_not_found(world: &TaskStoreWorld) -> Result<(), eyre::Report> {
    expect_failure(world, ErrorKind::NotFound)
}

#[then("the operation fails with a validation error")]
fn operation_fails_validation(world: &TaskStoreWorld) -> Result<(), eyre::Report> {
    expect_failure(world, ErrorKind::Validation)
}
