//! Virtual File System Types
//!
//! Node records and errors for the in-memory directory tree.

use chrono::{DateTime, Local};
use thiserror::Error;

/// Tree operation errors
///
/// The display text is the tail of a shell diagnostic; handlers prefix it
/// with their verb, e.g. `cat: notes.txt: No such file or directory`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VfsError {
    #[error("{name}: No such file or directory")]
    NotFound { name: String },

    #[error("{name}: File exists")]
    AlreadyExists { name: String },

    #[error("{name}: Directory not empty")]
    NotEmpty { name: String },

    #[error("{name}: Is a directory")]
    IsDirectory { name: String },

    #[error("cannot move '{name}' into itself")]
    IntoItself { name: String },

    #[error("{name}: Invalid argument")]
    InvalidName { name: String },
}

/// Index of a directory record in the tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirId(pub(crate) usize);

/// Identity of a file. Copies always get a fresh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub(crate) u64);

/// A leaf node: a name and one text blob.
#[derive(Debug, Clone)]
pub struct File {
    pub id: FileId,
    pub name: String,
    pub content: String,
    pub modified: DateTime<Local>,
}

impl File {
    pub(crate) fn new(id: FileId, name: &str, content: String) -> Self {
        Self {
            id,
            name: name.to_string(),
            content,
            modified: Local::now(),
        }
    }

    /// Replace the whole content.
    pub fn write(&mut self, content: &str) {
        self.content = content.to_string();
        self.modified = Local::now();
    }

    /// Append `text` on a new line, even when the file is empty.
    pub fn append_line(&mut self, text: &str) {
        self.content.push('\n');
        self.content.push_str(text);
        self.modified = Local::now();
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// A folder record. `parent` is a plain index used for upward walks only;
/// the owning link is the parent's `subdirectories` list.
#[derive(Debug, Clone)]
pub struct Directory {
    pub name: String,
    pub parent: Option<DirId>,
    pub subdirectories: Vec<DirId>,
    pub files: Vec<File>,
    pub modified: DateTime<Local>,
}

impl Directory {
    pub(crate) fn new(name: &str, parent: Option<DirId>) -> Self {
        Self {
            name: name.to_string(),
            parent,
            subdirectories: Vec::new(),
            files: Vec::new(),
            modified: Local::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.subdirectories.is_empty() && self.files.is_empty()
    }
}

/// Check a single path segment used as a node name.
pub fn validate_name(name: &str) -> Result<(), VfsError> {
    if name.is_empty() || name == "." || name == ".." || name.contains('/') {
        return Err(VfsError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}
