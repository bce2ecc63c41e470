//! Shared test fixtures

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use codepush_fs::config::StorageRoots;
use codepush_fs::storage::{FsResult, StatResult};
use codepush_fs::{FileUtil, Filesystem, FilesystemError, FsLocation, LocalFilesystem};
use tempfile::TempDir;

/// Calls seen and failures to inject
#[derive(Debug, Default)]
pub struct FaultState {
    pub copies: Vec<(String, String)>,
    pub fail_stat: HashSet<String>,
    pub fail_delete: HashSet<String>,
    pub fail_write: bool,
}

/// Local filesystem that records copies and fails on demand
#[derive(Debug, Clone)]
pub struct FaultyFs {
    inner: LocalFilesystem,
    pub state: Arc<Mutex<FaultState>>,
}

impl FaultyFs {
    pub fn fail_stat(&self, location: &FsLocation) {
        self.state.lock().unwrap().fail_stat.insert(location.to_string());
    }

    pub fn fail_delete(&self, location: &FsLocation) {
        self.state.lock().unwrap().fail_delete.insert(location.to_string());
    }

    pub fn fail_writes(&self) {
        self.state.lock().unwrap().fail_write = true;
    }

    pub fn copies(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().copies.clone()
    }

    pub async fn mkdir_data(&self, path: &str) {
        self.inner.mkdir(&FsLocation::data(path), true).await.unwrap();
    }

    pub async fn write_file_at(&self, location: &FsLocation, content: &str) {
        self.inner.write_file(location, content, true).await.unwrap();
    }

    /// Entry names of a data directory
    pub async fn entries(&self, path: &str) -> Vec<String> {
        self.inner.read_dir(&FsLocation::data(path)).await.unwrap()
    }

    fn stat_fails(&self, location: &FsLocation) -> bool {
        self.state.lock().unwrap().fail_stat.contains(&location.to_string())
    }
}

impl Filesystem for FaultyFs {
    async fn stat(&self, location: &FsLocation) -> FsResult<StatResult> {
        if self.stat_fails(location) {
            return Err(FilesystemError::PermissionDenied(location.to_string()));
        }
        self.inner.stat(location).await
    }

    async fn read_dir(&self, location: &FsLocation) -> FsResult<Vec<String>> {
        self.inner.read_dir(location).await
    }

    async fn read_file(&self, location: &FsLocation) -> FsResult<String> {
        self.inner.read_file(location).await
    }

    async fn write_file(&self, location: &FsLocation, data: &str, recursive: bool) -> FsResult<()> {
        let fail = self.state.lock().unwrap().fail_write;
        if fail {
            return Err(FilesystemError::PermissionDenied(location.to_string()));
        }
        self.inner.write_file(location, data, recursive).await
    }

    async fn copy(&self, from: &FsLocation, to: &FsLocation) -> FsResult<()> {
        self.state
            .lock()
            .unwrap()
            .copies
            .push((from.to_string(), to.to_string()));
        self.inner.copy(from, to).await
    }

    async fn delete_file(&self, location: &FsLocation) -> FsResult<()> {
        let fail = self
            .state
            .lock()
            .unwrap()
            .fail_delete
            .contains(&location.to_string());
        if fail {
            return Err(FilesystemError::IoError(std::io::Error::other("device busy")));
        }
        self.inner.delete_file(location).await
    }

    async fn rmdir(&self, location: &FsLocation, recursive: bool) -> FsResult<()> {
        self.inner.rmdir(location, recursive).await
    }

    async fn mkdir(&self, location: &FsLocation, recursive: bool) -> FsResult<()> {
        self.inner.mkdir(location, recursive).await
    }

    async fn get_uri(&self, location: &FsLocation) -> FsResult<String> {
        self.inner.get_uri(location).await
    }
}

/// A facade over fresh temporary storage roots
pub fn setup() -> (TempDir, FileUtil<FaultyFs>) {
    let tmp = TempDir::new().unwrap();
    let fs = FaultyFs {
        inner: LocalFilesystem::new(StorageRoots::under(tmp.path())),
        state: Arc::default(),
    };
    (tmp, FileUtil::new(fs))
}

/// Create a data file with parents
pub async fn put(util: &FileUtil<FaultyFs>, path: &str, content: &str) {
    util.filesystem()
        .write_file(&FsLocation::data(path), content, true)
        .await
        .unwrap();
}
