//! Integration tests for the JSON file snapshot store.

use std::sync::Arc;

use camino::Utf8PathBuf;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskboard::task::{
    adapters::JsonFileTaskSnapshotStore,
    domain::{Task, TaskStatus, TaskTitle},
    ports::{TaskSnapshotStore, TaskSnapshotStoreError},
    services::{
        CreateTaskRequest, SeedPolicy, TaskStore, TransitionTaskRequest, UpdateTaskRequest,
    },
};
use tempfile::TempDir;

struct DataDir {
    _dir: TempDir,
    file: Utf8PathBuf,
}

#[fixture]
fn data_dir() -> DataDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 temp path");
    DataDir {
        file: root.join("nested").join("tasks.json"),
        _dir: dir,
    }
}

fn open_snapshots(data: &DataDir) -> Arc<JsonFileTaskSnapshotStore> {
    Arc::new(JsonFileTaskSnapshotStore::open(&data.file).expect("open snapshot store"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_file_loads_as_none(data_dir: DataDir) {
    let snapshots = open_snapshots(&data_dir);

    let loaded = snapshots.load().await.expect("load should succeed");

    assert!(loaded.is_none());
    assert_eq!(snapshots.path(), data_dir.file.as_path());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn first_open_writes_seed_to_disk(data_dir: DataDir) {
    let snapshots = open_snapshots(&data_dir);

    let store = TaskStore::open(snapshots, Arc::new(DefaultClock), SeedPolicy::Examples)
        .await
        .expect("store should open");

    let raw = std::fs::read_to_string(&data_dir.file).expect("task file exists");
    let on_disk: serde_json::Value = serde_json::from_str(&raw).expect("task file is json");
    let statuses: Vec<_> = on_disk
        .as_array()
        .expect("task file holds an array")
        .iter()
        .filter_map(|task| task.get("status").and_then(serde_json::Value::as_str))
        .collect();
    assert_eq!(statuses, ["todo", "inProgress", "done"]);
    assert_eq!(store.list_all().await.len(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mutations_survive_restart(data_dir: DataDir) {
    let first_run = TaskStore::open(
        open_snapshots(&data_dir),
        Arc::new(DefaultClock),
        SeedPolicy::Empty,
    )
    .await
    .expect("store should open");
    let kept = first_run
        .create(CreateTaskRequest::new("Keep").with_description("survives"))
        .await
        .expect("create should succeed");
    let dropped = first_run
        .create(CreateTaskRequest::new("Drop"))
        .await
        .expect("create should succeed");
    first_run
        .transition_status(TransitionTaskRequest::new(kept.id(), "inProgress"))
        .await
        .expect("transition should succeed");
    first_run
        .update(kept.id(), UpdateTaskRequest::new().with_title("Kept"))
        .await
        .expect("update should succeed");
    first_run
        .delete(dropped.id())
        .await
        .expect("delete should succeed");
    let before_restart = first_run.list_all().await;
    drop(first_run);

    let second_run = TaskStore::open(
        open_snapshots(&data_dir),
        Arc::new(DefaultClock),
        SeedPolicy::Examples,
    )
    .await
    .expect("store should reopen");

    let after_restart = second_run.list_all().await;
    assert_eq!(after_restart, before_restart);
    let reloaded = after_restart.first().expect("one task persisted");
    assert_eq!(reloaded.title(), &TaskTitle::new("Kept").expect("valid title"));
    assert_eq!(reloaded.description(), "survives");
    assert_eq!(reloaded.status(), TaskStatus::InProgress);
    assert_eq!(reloaded.created_at(), kept.created_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_saves_leave_one_whole_collection(data_dir: DataDir) {
    let snapshots = open_snapshots(&data_dir);
    let seeded = TaskStore::open(
        Arc::clone(&snapshots),
        Arc::new(DefaultClock),
        SeedPolicy::Examples,
    )
    .await
    .expect("store should open")
    .list_all()
    .await;
    let collections: Vec<Vec<Task>> = (0..=seeded.len())
        .map(|len| seeded.iter().take(len).cloned().collect())
        .collect();

    let handles: Vec<_> = collections
        .iter()
        .cloned()
        .map(|tasks| {
            let shared = Arc::clone(&snapshots);
            tokio::spawn(async move { shared.save(&tasks).await })
        })
        .collect();
    for handle in handles {
        handle
            .await
            .expect("join save task")
            .expect("save should succeed");
    }

    let loaded = snapshots
        .load()
        .await
        .expect("load should succeed")
        .expect("collection persisted");
    assert!(collections.contains(&loaded));
    assert_eq!(entries_beside(&data_dir), ["tasks.json"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_leaves_no_temp_file_behind(data_dir: DataDir) {
    let snapshots = open_snapshots(&data_dir);

    snapshots.save(&[]).await.expect("save should succeed");
    snapshots.save(&[]).await.expect("second save should succeed");

    assert_eq!(entries_beside(&data_dir), ["tasks.json"]);
}

fn entries_beside(data: &DataDir) -> Vec<String> {
    let parent = data.file.parent().expect("file has a parent");
    std::fs::read_dir(parent)
        .expect("list data dir")
        .filter_map(Result::ok)
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn corrupt_file_is_reported_not_overwritten(data_dir: DataDir) {
    let snapshots = open_snapshots(&data_dir);
    std::fs::write(&data_dir.file, "{ not json").expect("write corrupt file");

    let result = TaskStore::open(
        Arc::clone(&snapshots),
        Arc::new(DefaultClock),
        SeedPolicy::Examples,
    )
    .await;

    assert!(result.is_err());
    assert!(matches!(
        snapshots.load().await,
        Err(TaskSnapshotStoreError::Corrupt(_))
    ));
    let raw = std::fs::read_to_string(&data_dir.file).expect("task file exists");
    assert_eq!(raw, "{ not json");
}
