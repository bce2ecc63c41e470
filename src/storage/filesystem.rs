//! Filesystem service contract
//!
//! The operations a platform filesystem must provide. Each call is
//! addressed by a storage root and a relative path; text is UTF-8.

use std::future::Future;

use crate::error::FilesystemError;
use crate::storage::directory::{FsLocation, StatResult};

pub type FsResult<T> = Result<T, FilesystemError>;

/// Platform filesystem service
pub trait Filesystem: Send + Sync {
    /// Metadata for the entry at `location`
    fn stat(&self, location: &FsLocation) -> impl Future<Output = FsResult<StatResult>> + Send;

    /// Names of the entries directly inside `location`
    fn read_dir(&self, location: &FsLocation) -> impl Future<Output = FsResult<Vec<String>>> + Send;

    /// Read a file as UTF-8 text
    fn read_file(&self, location: &FsLocation) -> impl Future<Output = FsResult<String>> + Send;

    /// Write UTF-8 text, replacing any existing content.
    ///
    /// With `recursive`, missing parent directories are created.
    fn write_file(
        &self,
        location: &FsLocation,
        data: &str,
        recursive: bool,
    ) -> impl Future<Output = FsResult<()>> + Send;

    /// Copy a file or a whole directory tree.
    ///
    /// Copying a directory onto an existing destination fails with
    /// `AlreadyExists`.
    fn copy(&self, from: &FsLocation, to: &FsLocation) -> impl Future<Output = FsResult<()>> + Send;

    fn delete_file(&self, location: &FsLocation) -> impl Future<Output = FsResult<()>> + Send;

    fn rmdir(&self, location: &FsLocation, recursive: bool) -> impl Future<Output = FsResult<()>> + Send;

    /// Create a directory. A recursive create of an existing directory succeeds.
    fn mkdir(&self, location: &FsLocation, recursive: bool) -> impl Future<Output = FsResult<()>> + Send;

    /// Resolve `location` to a full URI
    fn get_uri(&self, location: &FsLocation) -> impl Future<Output = FsResult<String>> + Send;
}
