//! UTF-8 text files

use log::error;

use super::{DEFAULT_DIRECTORY, FileUtil};
use crate::error::WriteError;
use crate::storage::{Directory, Filesystem, FsLocation, FsResult};

impl<F: Filesystem> FileUtil<F> {
    /// Writes a string to a file, creating the file when it is missing.
    ///
    /// The parent directory must already exist. `create_if_not_exists` is
    /// accepted for call-site compatibility and does not change behaviour.
    pub async fn write_string_to_file(
        &self,
        content: &str,
        directory: Directory,
        path: &str,
        _create_if_not_exists: bool,
    ) -> Result<(), WriteError> {
        let location = FsLocation::new(directory, path);
        let result = self.fs.write_file(&location, content, false).await;

        result.map_err(|source| {
            error!("Failed to write {location}: {source}");
            WriteError {
                path: location.to_string(),
                source,
            }
        })
    }

    pub async fn write_string_to_data_file(
        &self,
        content: &str,
        path: &str,
        create_if_not_exists: bool,
    ) -> Result<(), WriteError> {
        self.write_string_to_file(content, DEFAULT_DIRECTORY, path, create_if_not_exists)
            .await
    }

    pub async fn read_file(&self, directory: Directory, path: &str) -> FsResult<String> {
        self.fs.read_file(&FsLocation::new(directory, path)).await
    }

    pub async fn read_data_file(&self, path: &str) -> FsResult<String> {
        self.read_file(DEFAULT_DIRECTORY, path).await
    }
}
