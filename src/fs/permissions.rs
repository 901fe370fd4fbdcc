//! Simulated permission table.
//!
//! Entries are keyed by file identity, so two same-named files in different
//! directories keep separate modes. Nothing is ever enforced.

use std::collections::HashMap;

use super::types::FileId;

pub const DEFAULT_FILE_MODE: &str = "-rw-r--r--";
pub const DIRECTORY_MODE: &str = "drwxr-xr-x";

/// Map an octal mode argument to its symbolic form.
///
/// Only `777`, `755` and `644` are recognised; anything else falls back to
/// the default file mode.
pub fn symbolic_mode(octal: &str) -> &'static str {
    match octal {
        "777" => "-rwxrwxrwx",
        "755" => "-rwxr-xr-x",
        "644" => "-rw-r--r--",
        _ => DEFAULT_FILE_MODE,
    }
}

#[derive(Debug, Default)]
pub struct PermissionTable {
    modes: HashMap<FileId, &'static str>,
}

impl PermissionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, file: FileId, mode: &'static str) {
        self.modes.insert(file, mode);
    }

    /// Mode of `file`, or the default when none was set.
    pub fn get(&self, file: FileId) -> &'static str {
        self.modes.get(&file).copied().unwrap_or(DEFAULT_FILE_MODE)
    }

    /// Drop entries for files that no longer exist.
    pub fn forget<I: IntoIterator<Item = FileId>>(&mut self, files: I) {
        for file in files {
            self.modes.remove(&file);
        }
    }

    pub fn clear(&mut self) {
        self.modes.clear();
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}
