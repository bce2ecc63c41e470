//! Storage roots and locations
//!
//! Every filesystem call is addressed by a storage root plus a path
//! relative to that root.

use std::fmt;
use std::str::FromStr;

/// Named base location under which relative paths are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Directory {
    Documents,
    #[default]
    Data,
    Library,
    Cache,
    External,
    ExternalStorage,
}

impl Directory {
    pub const ALL: [Directory; 6] = [
        Directory::Documents,
        Directory::Data,
        Directory::Library,
        Directory::Cache,
        Directory::External,
        Directory::ExternalStorage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Directory::Documents => "documents",
            Directory::Data => "data",
            Directory::Library => "library",
            Directory::Cache => "cache",
            Directory::External => "external",
            Directory::ExternalStorage => "external-storage",
        }
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Directory {
    type Err = String;

    /// Accepts `external-storage`, `external_storage` and `ExternalStorage`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "documents" => Ok(Directory::Documents),
            "data" => Ok(Directory::Data),
            "library" => Ok(Directory::Library),
            "cache" => Ok(Directory::Cache),
            "external" => Ok(Directory::External),
            "externalstorage" => Ok(Directory::ExternalStorage),
            _ => Err(format!("unknown storage directory: {s}")),
        }
    }
}

/// A path relative to a storage root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsLocation {
    pub directory: Directory,
    pub path: String,
}

impl FsLocation {
    pub fn new(directory: Directory, path: impl Into<String>) -> Self {
        Self {
            directory,
            path: path.into(),
        }
    }

    /// Location under the default `Data` root
    pub fn data(path: impl Into<String>) -> Self {
        Self::new(Directory::Data, path)
    }

    /// Same root, with `name` appended to the path
    pub fn child(&self, name: &str) -> Self {
        Self {
            directory: self.directory,
            path: crate::storage::validation::join_path(&self.path, name),
        }
    }
}

impl fmt::Display for FsLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.directory, self.path)
    }
}

/// Kind of entry reported by `stat`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Other,
}

/// Metadata returned by `stat`
#[derive(Debug, Clone)]
pub struct StatResult {
    pub kind: EntryKind,
    pub size: u64,
    /// Milliseconds since the Unix epoch, when the platform reports it
    pub modified_ms: Option<u64>,
    pub uri: String,
}

impl StatResult {
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}
