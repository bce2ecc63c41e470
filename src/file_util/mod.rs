//! Package cache file helpers
//!
//! A stateless facade over a [`Filesystem`] used by the update client to
//! manage its local package directory. Most calls go straight through to
//! the filesystem; the few that add behaviour live in the submodules.

mod cleanup;
mod copy;
mod probe;
mod text;

use crate::storage::{Directory, Filesystem, FsLocation, FsResult};

/// Storage root used by the `*_data_*` helpers
pub const DEFAULT_DIRECTORY: Directory = Directory::Data;

/// Entries macOS adds to archives. Copying them fails on some platforms.
pub const DEFAULT_IGNORE_LIST: [&str; 2] = [".DS_Store", "__MACOSX"];

#[derive(Debug, Clone)]
pub struct FileUtil<F> {
    fs: F,
}

impl<F: Filesystem> FileUtil<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    pub async fn get_uri(&self, directory: Directory, path: &str) -> FsResult<String> {
        self.fs.get_uri(&FsLocation::new(directory, path)).await
    }

    pub async fn get_data_uri(&self, path: &str) -> FsResult<String> {
        self.get_uri(DEFAULT_DIRECTORY, path).await
    }

    pub async fn copy(&self, source: &FsLocation, destination: &FsLocation) -> FsResult<()> {
        self.fs.copy(source, destination).await
    }
}
