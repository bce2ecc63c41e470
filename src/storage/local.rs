//! Local disk filesystem
//!
//! Implements the filesystem service on top of `tokio::fs`, with each
//! storage root mapped to a configured base directory.

use log::debug;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use tokio::fs;

use crate::config::StorageRoots;
use crate::error::FilesystemError;
use crate::storage::directory::{EntryKind, FsLocation, StatResult};
use crate::storage::filesystem::{Filesystem, FsResult};
use crate::storage::validation::resolve_relative_path;

#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    roots: StorageRoots,
}

impl LocalFilesystem {
    pub fn new(roots: StorageRoots) -> Self {
        Self { roots }
    }

    /// Real path for a location
    pub fn resolve(&self, location: &FsLocation) -> FsResult<PathBuf> {
        resolve_relative_path(self.roots.root_for(location.directory), &location.path)
    }

    fn uri_for(path: &Path) -> FsResult<String> {
        let absolute = std::path::absolute(path)
            .map_err(|e| FilesystemError::from_io(e, path.display().to_string()))?;
        Ok(format!("file://{}", absolute.display()))
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> FilesystemError + '_ {
    move |e| FilesystemError::from_io(e, path.display().to_string())
}

/// Copy a directory tree into `to`, which must not exist yet
async fn copy_tree(from: &Path, to: &Path) -> FsResult<()> {
    let mut pending = vec![(from.to_path_buf(), to.to_path_buf())];

    while let Some((src, dst)) = pending.pop() {
        fs::create_dir(&dst).await.map_err(io_error(&dst))?;

        let mut entries = fs::read_dir(&src).await.map_err(io_error(&src))?;
        while let Some(entry) = entries.next_entry().await.map_err(io_error(&src))? {
            let target = dst.join(entry.file_name());
            let file_type = entry.file_type().await.map_err(io_error(&entry.path()))?;

            if file_type.is_dir() {
                pending.push((entry.path(), target));
            } else {
                fs::copy(entry.path(), &target)
                    .await
                    .map_err(io_error(&target))?;
            }
        }
    }

    Ok(())
}

impl Filesystem for LocalFilesystem {
    async fn stat(&self, location: &FsLocation) -> FsResult<StatResult> {
        let path = self.resolve(location)?;
        let metadata = fs::metadata(&path).await.map_err(io_error(&path))?;

        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else if metadata.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };

        let modified_ms = metadata
            .modified()
            .ok()
            .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
            .and_then(|dur| u64::try_from(dur.as_millis()).ok());

        Ok(StatResult {
            kind,
            size: if metadata.is_dir() { 0 } else { metadata.len() },
            modified_ms,
            uri: Self::uri_for(&path)?,
        })
    }

    async fn read_dir(&self, location: &FsLocation) -> FsResult<Vec<String>> {
        let path = self.resolve(location)?;
        let mut entries = fs::read_dir(&path).await.map_err(io_error(&path))?;

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(io_error(&path))? {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
        names.sort();

        debug!("Listed {} ({} entries)", path.display(), names.len());
        Ok(names)
    }

    async fn read_file(&self, location: &FsLocation) -> FsResult<String> {
        let path = self.resolve(location)?;
        fs::read_to_string(&path).await.map_err(io_error(&path))
    }

    async fn write_file(&self, location: &FsLocation, data: &str, recursive: bool) -> FsResult<()> {
        let path = self.resolve(location)?;

        if recursive {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).await.map_err(io_error(parent))?;
            }
        }

        fs::write(&path, data).await.map_err(io_error(&path))
    }

    async fn copy(&self, from: &FsLocation, to: &FsLocation) -> FsResult<()> {
        let src = self.resolve(from)?;
        let dst = self.resolve(to)?;
        let metadata = fs::metadata(&src).await.map_err(io_error(&src))?;

        if metadata.is_dir() {
            if fs::try_exists(&dst).await.map_err(io_error(&dst))? {
                return Err(FilesystemError::AlreadyExists(dst.display().to_string()));
            }
            copy_tree(&src, &dst).await?;
        } else {
            fs::copy(&src, &dst).await.map_err(io_error(&dst))?;
        }

        debug!("Copied {} -> {}", src.display(), dst.display());
        Ok(())
    }

    async fn delete_file(&self, location: &FsLocation) -> FsResult<()> {
        let path = self.resolve(location)?;
        fs::remove_file(&path).await.map_err(io_error(&path))
    }

    async fn rmdir(&self, location: &FsLocation, recursive: bool) -> FsResult<()> {
        let path = self.resolve(location)?;
        if recursive {
            fs::remove_dir_all(&path).await.map_err(io_error(&path))
        } else {
            fs::remove_dir(&path).await.map_err(io_error(&path))
        }
    }

    async fn mkdir(&self, location: &FsLocation, recursive: bool) -> FsResult<()> {
        let path = self.resolve(location)?;
        if recursive {
            fs::create_dir_all(&path).await.map_err(io_error(&path))
        } else {
            fs::create_dir(&path).await.map_err(io_error(&path))
        }
    }

    async fn get_uri(&self, location: &FsLocation) -> FsResult<String> {
        let path = self.resolve(location)?;
        Self::uri_for(&path)
    }
}
