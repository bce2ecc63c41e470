//! Path validation
//!
//! Maps root-relative paths onto real paths and rejects traversal.

use std::path::{Component, Path, PathBuf};

use crate::error::FilesystemError;

/// Resolve a root-relative path to a real path under `root`.
///
/// Leading slashes, empty segments and `.` are ignored. An empty path
/// resolves to `root` itself.
pub fn resolve_relative_path(root: &Path, relative: &str) -> Result<PathBuf, FilesystemError> {
    if relative.contains('\0') {
        return Err(FilesystemError::InvalidPath(relative.to_string()));
    }

    let mut resolved = root.to_path_buf();

    for segment in relative.split(['/', '\\']) {
        match segment {
            "" | "." => continue,
            ".." => return Err(FilesystemError::PathTraversal(relative.to_string())),
            name => {
                // A drive prefix or root would replace the base on join
                let mut components = Path::new(name).components();
                match (components.next(), components.next()) {
                    (Some(Component::Normal(_)), None) => resolved.push(name),
                    _ => return Err(FilesystemError::InvalidPath(relative.to_string())),
                }
            }
        }
    }

    Ok(resolved)
}

/// Append an entry name to a root-relative directory path
pub fn join_path(dir: &str, name: &str) -> String {
    let dir = dir.trim_end_matches('/');
    let name = name.trim_start_matches('/');

    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{dir}/{name}")
    }
}
