//! File system storage
//!
//! The filesystem service contract, its local implementation, and path
//! validation.

pub mod directory;
pub mod filesystem;
pub mod local;
pub mod results;
pub mod validation;

pub use directory::{Directory, EntryKind, FsLocation, StatResult};
pub use filesystem::{Filesystem, FsResult};
pub use local::LocalFilesystem;
pub use results::{DeleteSummary, Presence};
pub use validation::{join_path, resolve_relative_path};
