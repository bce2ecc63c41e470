//! Directory entry copy

use log::{debug, info};
use std::collections::HashSet;

use super::{DEFAULT_IGNORE_LIST, FileUtil};
use crate::storage::{Filesystem, FsLocation, FsResult};

impl<F: Filesystem> FileUtil<F> {
    /// Copy the entries of `source` into `destination`.
    ///
    /// The filesystem refuses to copy a directory onto an existing one, so
    /// when `destination` exists the source is walked and merged entry by
    /// entry. [`DEFAULT_IGNORE_LIST`] is skipped at every depth, `ignore_list`
    /// only in the top-level listing. A missing destination (at any depth)
    /// gets one bulk copy of the whole source subtree.
    pub async fn copy_directory_entries_to<S: AsRef<str>>(
        &self,
        source: &FsLocation,
        destination: &FsLocation,
        ignore_list: &[S],
    ) -> FsResult<()> {
        let top_level: HashSet<&str> = ignore_list.iter().map(|name| name.as_ref()).collect();

        let mut pending = vec![(source.clone(), destination.clone(), true)];

        while let Some((src, dst, is_top)) = pending.pop() {
            if !self.directory_exists(dst.directory, &dst.path).await {
                debug!("Bulk copy {src} -> {dst}");
                self.copy(&src, &dst).await?;
                continue;
            }

            for name in self.fs.read_dir(&src).await? {
                if DEFAULT_IGNORE_LIST.contains(&name.as_str())
                    || (is_top && top_level.contains(name.as_str()))
                {
                    debug!("Skipping ignored entry {}", src.child(&name));
                    continue;
                }

                let from = src.child(&name);
                let to = dst.child(&name);

                if self.directory_exists(from.directory, &from.path).await {
                    pending.push((from, to, false));
                } else {
                    self.copy(&from, &to).await?;
                }
            }
        }

        info!("Copied directory entries {source} -> {destination}");
        Ok(())
    }
}
