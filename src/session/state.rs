//! Mutable state owned by one session.

use crate::config::ShellConfig;
use crate::fs::{absolute_path, ArchiveStore, DirId, FileId, PermissionTable, VirtualTree};

use super::history::CommandHistory;

pub struct ShellState {
    pub tree: VirtualTree,
    pub cwd: DirId,
    pub history: CommandHistory,
    pub permissions: PermissionTable,
    pub archives: ArchiveStore,
}

impl ShellState {
    pub fn new(config: &ShellConfig) -> Self {
        let tree = VirtualTree::new(&config.root_name);
        let cwd = tree.root();
        Self {
            tree,
            cwd,
            history: CommandHistory::new(config.history_limit),
            permissions: PermissionTable::new(),
            archives: ArchiveStore::new(),
        }
    }

    /// Back to an empty root: tree, history and side tables are all cleared.
    pub fn reset(&mut self) {
        self.tree = VirtualTree::new(self.tree.root_name());
        self.cwd = self.tree.root();
        self.history.clear();
        self.permissions.clear();
        self.archives.clear();
        tracing::debug!("session state reset");
    }

    pub fn current_path(&self) -> String {
        absolute_path(&self.tree, self.cwd)
    }

    /// Drop side-table entries for files that left the tree.
    pub fn forget_files<I: IntoIterator<Item = FileId>>(&mut self, files: I) {
        self.permissions.forget(files);
    }
}
