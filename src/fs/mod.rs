//! File System Module
//!
//! The in-memory directory tree a session operates on, plus the simulated
//! permission table and archive store that sit beside it.

pub mod archive;
pub mod path;
pub mod permissions;
pub mod tree;
pub mod types;

pub use archive::{normalize_archive_name, ArchiveStore, ArchivedFile, Snapshot};
pub use path::{absolute_path, resolve_dir, segments, split_start};
pub use permissions::{symbolic_mode, PermissionTable, DEFAULT_FILE_MODE, DIRECTORY_MODE};
pub use tree::VirtualTree;
pub use types::*;
