//! Error types
//!
//! Defines the filesystem service error and the few facade-level errors
//! layered on top of it.

use std::fmt;
use std::io;

/// Errors reported by a filesystem service
#[derive(Debug)]
pub enum FilesystemError {
    NotFound(String),
    AlreadyExists(String),
    NotADirectory(String),
    IsADirectory(String),
    PermissionDenied(String),
    PathTraversal(String),
    InvalidPath(String),
    IoError(io::Error),
}

impl FilesystemError {
    /// Map an I/O error onto a typed variant, keeping `path` for context
    pub fn from_io(error: io::Error, path: impl Into<String>) -> Self {
        let path = path.into();
        match error.kind() {
            io::ErrorKind::NotFound => FilesystemError::NotFound(path),
            io::ErrorKind::AlreadyExists => FilesystemError::AlreadyExists(path),
            io::ErrorKind::PermissionDenied => FilesystemError::PermissionDenied(path),
            io::ErrorKind::NotADirectory => FilesystemError::NotADirectory(path),
            io::ErrorKind::IsADirectory => FilesystemError::IsADirectory(path),
            _ => FilesystemError::IoError(error),
        }
    }

    /// Short, stable error code
    pub fn code(&self) -> &'static str {
        match self {
            FilesystemError::NotFound(_) => "ENOENT",
            FilesystemError::AlreadyExists(_) => "EEXIST",
            FilesystemError::NotADirectory(_) => "ENOTDIR",
            FilesystemError::IsADirectory(_) => "EISDIR",
            FilesystemError::PermissionDenied(_) => "EACCES",
            FilesystemError::PathTraversal(_) => "ETRAVERSAL",
            FilesystemError::InvalidPath(_) => "EINVAL",
            FilesystemError::IoError(_) => "EIO",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FilesystemError::NotFound(_))
    }
}

impl fmt::Display for FilesystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilesystemError::NotFound(p) => write!(f, "No such file or directory: {}", p),
            FilesystemError::AlreadyExists(p) => write!(f, "Already exists: {}", p),
            FilesystemError::NotADirectory(p) => write!(f, "Not a directory: {}", p),
            FilesystemError::IsADirectory(p) => write!(f, "Is a directory: {}", p),
            FilesystemError::PermissionDenied(p) => write!(f, "Permission denied: {}", p),
            FilesystemError::PathTraversal(p) => write!(f, "Path traversal attempt: {}", p),
            FilesystemError::InvalidPath(p) => write!(f, "Invalid path: {}", p),
            FilesystemError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for FilesystemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FilesystemError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

/// Failure to write a package information file
#[derive(Debug)]
pub struct WriteError {
    pub path: String,
    pub source: FilesystemError,
}

impl WriteError {
    pub const MESSAGE: &'static str = "Could not write the current package information file";

    pub fn code(&self) -> &'static str {
        self.source.code()
    }
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. Error code: {}", Self::MESSAGE, self.code())
    }
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// General error that encompasses all error types
#[derive(Debug)]
pub enum CacheError {
    Filesystem(FilesystemError),
    Write(WriteError),
    Config(config::ConfigError),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::Filesystem(e) => write!(f, "Filesystem error: {}", e),
            CacheError::Write(e) => write!(f, "Write error: {}", e),
            CacheError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

impl From<FilesystemError> for CacheError {
    fn from(error: FilesystemError) -> Self {
        CacheError::Filesystem(error)
    }
}

impl From<WriteError> for CacheError {
    fn from(error: WriteError) -> Self {
        CacheError::Write(error)
    }
}

impl From<config::ConfigError> for CacheError {
    fn from(error: config::ConfigError) -> Self {
        CacheError::Config(error)
    }
}
