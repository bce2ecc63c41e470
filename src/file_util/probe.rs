//! Existence probes

use log::debug;

use super::{DEFAULT_DIRECTORY, FileUtil};
use crate::storage::{Directory, EntryKind, Filesystem, FsLocation, Presence};

impl<F: Filesystem> FileUtil<F> {
    async fn probe(&self, directory: Directory, path: &str, expected: EntryKind) -> Presence {
        match self.fs.stat(&FsLocation::new(directory, path)).await {
            Ok(stat) if stat.kind == expected => Presence::Exists,
            Ok(_) => Presence::Absent,
            Err(e) if e.is_not_found() => Presence::Absent,
            Err(e) => Presence::QueryFailed(e),
        }
    }

    pub async fn probe_directory(&self, directory: Directory, path: &str) -> Presence {
        self.probe(directory, path, EntryKind::Directory).await
    }

    pub async fn probe_file(&self, directory: Directory, path: &str) -> Presence {
        self.probe(directory, path, EntryKind::File).await
    }

    /// `true` only when a directory is known to be there. A failed query
    /// counts as missing.
    pub async fn directory_exists(&self, directory: Directory, path: &str) -> bool {
        match self.probe_directory(directory, path).await {
            Presence::QueryFailed(e) => {
                debug!("Treating directory {directory}:{path} as missing: {e}");
                false
            }
            presence => presence.exists(),
        }
    }

    /// `true` only when a regular file is known to be there. A failed
    /// query counts as missing.
    pub async fn file_exists(&self, directory: Directory, path: &str) -> bool {
        match self.probe_file(directory, path).await {
            Presence::QueryFailed(e) => {
                debug!("Treating file {directory}:{path} as missing: {e}");
                false
            }
            presence => presence.exists(),
        }
    }

    pub async fn data_directory_exists(&self, path: &str) -> bool {
        self.directory_exists(DEFAULT_DIRECTORY, path).await
    }
}
