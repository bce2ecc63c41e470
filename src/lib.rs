//! File helpers for an app-update client's local package cache.

pub mod config;
pub mod error;
pub mod file_util;
pub mod storage;
pub mod utils;

pub use crate::config::CacheConfig;
pub use error::{CacheError, FilesystemError, WriteError};
pub use file_util::{DEFAULT_DIRECTORY, DEFAULT_IGNORE_LIST, FileUtil};
pub use storage::{Directory, Filesystem, FsLocation, LocalFilesystem, Presence};
