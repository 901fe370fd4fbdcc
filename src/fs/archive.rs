//! Simulated archive store.
//!
//! An archive is a snapshot: plain name/content pairs copied out of the tree
//! when the archive is created. Nothing in the snapshot refers back to the
//! source files.

use indexmap::IndexMap;

pub const ARCHIVE_SUFFIX: &str = ".zip";

/// One file captured in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedFile {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub files: Vec<ArchivedFile>,
}

impl Snapshot {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Append the `.zip` suffix unless it is already there.
pub fn normalize_archive_name(name: &str) -> String {
    if name.ends_with(ARCHIVE_SUFFIX) {
        name.to_string()
    } else {
        format!("{}{}", name, ARCHIVE_SUFFIX)
    }
}

/// Archives by normalized name, in creation order.
#[derive(Debug, Default)]
pub struct ArchiveStore {
    archives: IndexMap<String, Snapshot>,
}

impl ArchiveStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `snapshot` under `name`, replacing an older archive of that name.
    pub fn insert(&mut self, name: String, snapshot: Snapshot) -> Option<Snapshot> {
        self.archives.insert(name, snapshot)
    }

    pub fn get(&self, name: &str) -> Option<&Snapshot> {
        self.archives.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.archives.keys().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.archives.clear();
    }

    pub fn len(&self) -> usize {
        self.archives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archives.is_empty()
    }
}
