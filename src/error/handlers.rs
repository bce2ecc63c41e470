//! Error handlers
//!
//! Provides error reporting for the command-line front end.

use crate::error::types::{CacheError, FilesystemError};
use log::error;

/// Handle a cache error
pub fn handle_error(err: &CacheError) {
    error!("codepush-fs error: {}", err);
}

/// Convert error to process exit code
pub fn error_to_exit_code(err: &CacheError) -> u8 {
    match err {
        CacheError::Config(_) => 78,
        CacheError::Write(e) => filesystem_exit_code(&e.source),
        CacheError::Filesystem(e) => filesystem_exit_code(e),
    }
}

fn filesystem_exit_code(err: &FilesystemError) -> u8 {
    match err {
        FilesystemError::NotFound(_) => 66,
        FilesystemError::PermissionDenied(_) => 77,
        FilesystemError::PathTraversal(_) | FilesystemError::InvalidPath(_) => 65,
        FilesystemError::AlreadyExists(_)
        | FilesystemError::NotADirectory(_)
        | FilesystemError::IsADirectory(_)
        | FilesystemError::IoError(_) => 74,
    }
}
