//! Directory cleanup and batch deletion

use log::{info, warn};

use super::{DEFAULT_DIRECTORY, FileUtil};
use crate::storage::{DeleteSummary, Filesystem, FsLocation, FsResult, join_path};

impl<F: Filesystem> FileUtil<F> {
    /// Makes sure the given directory exists and is empty, and returns its URI.
    pub async fn clean_data_directory(&self, path: &str) -> FsResult<String> {
        if self.data_directory_exists(path).await {
            self.delete_data_directory(path).await?;
        }

        let location = FsLocation::new(DEFAULT_DIRECTORY, path);
        self.fs.mkdir(&location, true).await?;
        let uri = self.fs.get_uri(&location).await?;

        info!("Cleaned data directory {path}");
        Ok(uri)
    }

    /// Recursively deletes a directory and its contents.
    pub async fn delete_data_directory(&self, path: &str) -> FsResult<()> {
        self.fs
            .rmdir(&FsLocation::new(DEFAULT_DIRECTORY, path), true)
            .await?;
        info!("Deleted data directory {path}");
        Ok(())
    }

    /// Deletes the named files from a directory.
    ///
    /// Missing files are skipped and a failed deletion is logged; neither
    /// stops the batch.
    pub async fn delete_entries_from_data_directory<S: AsRef<str>>(
        &self,
        dir_path: &str,
        files_to_delete: &[S],
    ) -> DeleteSummary {
        let mut summary = DeleteSummary::default();

        for file in files_to_delete {
            let path = join_path(dir_path, file.as_ref());

            if !self.file_exists(DEFAULT_DIRECTORY, &path).await {
                summary.skipped.push(path);
                continue;
            }

            match self
                .fs
                .delete_file(&FsLocation::new(DEFAULT_DIRECTORY, &path))
                .await
            {
                Ok(()) => summary.deleted.push(path),
                Err(e) => {
                    warn!("Could not delete file: {path} ({e})");
                    summary.failed.push(path);
                }
            }
        }

        info!(
            "Deleted {} of {} entries from {dir_path}",
            summary.deleted.len(),
            files_to_delete.len()
        );
        summary
    }
}
