//! JSON file snapshot store.
//!
//! The whole collection is written as a pretty-printed JSON array. Each save
//! goes to its own hidden sibling file which is synced and then renamed over
//! the target, so a concurrent reader sees either the previous file or the
//! new one. The directory is synced after the rename.

use crate::task::{
    domain::Task,
    ports::{TaskSnapshotStore, TaskSnapshotStoreError, TaskSnapshotStoreResult},
};
use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::{ErrorKind, Write};
use std::sync::Arc;
use uuid::Uuid;

/// Task snapshot store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileTaskSnapshotStore {
    dir: Arc<Dir>,
    file_name: String,
    path: Utf8PathBuf,
}

impl JsonFileTaskSnapshotStore {
    /// Opens the store for `path`, creating missing parent directories.
    ///
    /// The file itself is not created until the first save.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSnapshotStoreError::Persistence`] when `path` has no
    /// file name or its parent directory cannot be opened.
    pub fn open(path: &Utf8Path) -> TaskSnapshotStoreResult<Self> {
        let file_name = path.file_name().ok_or_else(|| {
            TaskSnapshotStoreError::persistence(std::io::Error::other(
                "task file path must include a file name",
            ))
        })?;
        let parent = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };
        Dir::create_ambient_dir_all(parent, ambient_authority())
            .map_err(TaskSnapshotStoreError::persistence)?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(TaskSnapshotStoreError::persistence)?;

        Ok(Self {
            dir: Arc::new(dir),
            file_name: file_name.to_owned(),
            path: path.to_owned(),
        })
    }

    /// Returns the path this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn temp_file_name(&self) -> String {
        format!(".{}.{}.tmp", self.file_name, Uuid::new_v4().simple())
    }
}

fn read_tasks(dir: &Dir, file_name: &str) -> TaskSnapshotStoreResult<Option<Vec<Task>>> {
    let contents = match dir.read_to_string(file_name) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(TaskSnapshotStoreError::persistence(err)),
    };
    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|err| TaskSnapshotStoreError::Corrupt(format!("{file_name}: {err}")))
}

fn write_tasks(
    dir: &Dir,
    temp_name: &str,
    file_name: &str,
    bytes: &[u8],
) -> std::io::Result<()> {
    let written = write_synced(dir, temp_name, bytes)
        .and_then(|()| dir.rename(temp_name, dir, file_name));
    if let Err(err) = written {
        let _cleanup = dir.remove_file(temp_name);
        return Err(err);
    }
    sync_dir(dir)
}

fn write_synced(dir: &Dir, name: &str, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = dir.create(name)?;
    file.write_all(bytes)?;
    file.write_all(b"\n")?;
    file.sync_all()
}

fn sync_dir(dir: &Dir) -> std::io::Result<()> {
    // Directories cannot be opened as files on every platform.
    match dir.open(".") {
        Ok(handle) => handle.sync_all(),
        Err(_) => Ok(()),
    }
}

#[async_trait]
impl TaskSnapshotStore for JsonFileTaskSnapshotStore {
    async fn load(&self) -> TaskSnapshotStoreResult<Option<Vec<Task>>> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        tokio::task::spawn_blocking(move || read_tasks(&dir, &file_name))
            .await
            .map_err(|err| {
                TaskSnapshotStoreError::persistence(std::io::Error::other(err.to_string()))
            })?
    }

    async fn save(&self, tasks: &[Task]) -> TaskSnapshotStoreResult<()> {
        let bytes = serde_json::to_vec_pretty(tasks).map_err(TaskSnapshotStoreError::persistence)?;
        let dir = Arc::clone(&self.dir);
        let temp_name = self.temp_file_name();
        let file_name = self.file_name.clone();
        tokio::task::spawn_blocking(move || write_tasks(&dir, &temp_name, &file_name, &bytes))
            .await
            .map_err(|err| {
                TaskSnapshotStoreError::persistence(std::io::Error::other(err.to_string()))
            })?
            .map_err(TaskSnapshotStoreError::persistence)
    }
}
