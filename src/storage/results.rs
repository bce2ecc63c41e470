//! Storage result types
//!
//! Defines result structures returned by the file helpers.

use crate::error::FilesystemError;

/// Outcome of an existence probe
#[derive(Debug)]
pub enum Presence {
    /// An entry of the requested kind is there
    Exists,
    /// Nothing is there, or an entry of another kind
    Absent,
    /// The filesystem could not answer
    QueryFailed(FilesystemError),
}

impl Presence {
    pub fn exists(&self) -> bool {
        matches!(self, Presence::Exists)
    }
}

/// Result of a batch file deletion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteSummary {
    pub deleted: Vec<String>,
    /// Names with no file behind them
    pub skipped: Vec<String>,
    pub failed: Vec<String>,
}

impl DeleteSummary {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
