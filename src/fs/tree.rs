//! Arena-backed directory tree.
//!
//! Directories live in a slot vector addressed by [`DirId`]. Removing a
//! subtree empties its slots; ids are never reused within one tree, so a
//! stale id can only point at an empty slot.
//!
//! Subtree walks use explicit worklists, never recursion, so nesting depth
//! is limited by memory rather than the call stack.

use super::types::*;

pub struct VirtualTree {
    slots: Vec<Option<Directory>>,
    root: DirId,
    next_file_id: u64,
}

impl VirtualTree {
    /// Create a tree holding only the root directory.
    pub fn new(root_name: &str) -> Self {
        Self {
            slots: vec![Some(Directory::new(root_name, None))],
            root: DirId(0),
            next_file_id: 0,
        }
    }

    pub fn root(&self) -> DirId {
        self.root
    }

    pub fn root_name(&self) -> &str {
        &self.dir(self.root).name
    }

    /// Whether `id` still refers to a live directory.
    pub fn contains(&self, id: DirId) -> bool {
        matches!(self.slots.get(id.0), Some(Some(_)))
    }

    /// Get a directory record.
    ///
    /// # Panics
    ///
    /// Panics if the id refers to a removed directory.
    pub fn dir(&self, id: DirId) -> &Directory {
        match self.slots.get(id.0) {
            Some(Some(dir)) => dir,
            _ => panic!("stale directory id {}", id.0),
        }
    }

    fn dir_mut(&mut self, id: DirId) -> &mut Directory {
        match self.slots.get_mut(id.0) {
            Some(Some(dir)) => dir,
            _ => panic!("stale directory id {}", id.0),
        }
    }

    pub fn find_subdir(&self, parent: DirId, name: &str) -> Option<DirId> {
        self.dir(parent)
            .subdirectories
            .iter()
            .copied()
            .find(|&child| self.dir(child).name == name)
    }

    pub fn find_file(&self, dir: DirId, name: &str) -> Option<&File> {
        self.dir(dir).files.iter().find(|f| f.name == name)
    }

    pub fn find_file_mut(&mut self, dir: DirId, name: &str) -> Option<&mut File> {
        self.dir_mut(dir).files.iter_mut().find(|f| f.name == name)
    }

    /// Whether `dir` holds a file or subdirectory called `name`.
    pub fn has_entry(&self, dir: DirId, name: &str) -> bool {
        self.find_subdir(dir, name).is_some() || self.find_file(dir, name).is_some()
    }

    // ------------------------------------------------------------------
    // Directories
    // ------------------------------------------------------------------

    /// Create a single subdirectory. Fails if the name is taken.
    pub fn create_dir(&mut self, parent: DirId, name: &str) -> Result<DirId, VfsError> {
        validate_name(name)?;
        if self.has_entry(parent, name) {
            return Err(VfsError::AlreadyExists {
                name: name.to_string(),
            });
        }
        Ok(self.attach_new_dir(parent, name))
    }

    /// Walk `segments` from `from`, creating each missing directory.
    ///
    /// Everything is validated before the first directory is created, so a
    /// failure leaves the tree untouched.
    pub fn create_dir_all(&mut self, from: DirId, segments: &[&str]) -> Result<DirId, VfsError> {
        if segments.is_empty() {
            return Err(VfsError::InvalidName { name: String::new() });
        }
        for segment in segments {
            validate_name(segment)?;
        }

        let mut current = from;
        let mut first_missing = None;
        for (i, segment) in segments.iter().enumerate() {
            match self.find_subdir(current, segment) {
                Some(existing) => current = existing,
                None => {
                    if self.find_file(current, segment).is_some() {
                        return Err(VfsError::AlreadyExists {
                            name: segments[..=i].join("/"),
                        });
                    }
                    first_missing = Some(i);
                    break;
                }
            }
        }

        if let Some(start) = first_missing {
            for segment in &segments[start..] {
                current = self.attach_new_dir(current, segment);
            }
        }
        Ok(current)
    }

    fn attach_new_dir(&mut self, parent: DirId, name: &str) -> DirId {
        let id = DirId(self.slots.len());
        self.slots.push(Some(Directory::new(name, Some(parent))));
        self.dir_mut(parent).subdirectories.push(id);
        id
    }

    /// Detach `id` from its parent and free its whole subtree.
    ///
    /// Returns the ids of every file that went with it. The root cannot be
    /// removed; asking for it returns nothing.
    pub fn remove_dir(&mut self, id: DirId) -> Vec<FileId> {
        let mut removed = Vec::new();
        if id == self.root {
            return removed;
        }
        if let Some(parent) = self.dir(id).parent {
            self.dir_mut(parent).subdirectories.retain(|&child| child != id);
        }
        self.free_subtree(id, &mut removed);
        removed
    }

    /// Remove `id` only when it holds no files and no subdirectories.
    pub fn remove_empty_dir(&mut self, id: DirId) -> Result<(), VfsError> {
        if !self.dir(id).is_empty() {
            return Err(VfsError::NotEmpty {
                name: self.dir(id).name.clone(),
            });
        }
        self.remove_dir(id);
        Ok(())
    }

    fn free_subtree(&mut self, id: DirId, removed: &mut Vec<FileId>) {
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(dir) = self.slots.get_mut(next.0).and_then(Option::take) {
                removed.extend(dir.files.iter().map(|f| f.id));
                pending.extend(dir.subdirectories);
            }
        }
    }

    /// Rename a directory in place.
    pub fn rename_dir(&mut self, id: DirId, new_name: &str) -> Result<(), VfsError> {
        validate_name(new_name)?;
        if let Some(parent) = self.dir(id).parent {
            let taken = self
                .find_subdir(parent, new_name)
                .map_or(false, |other| other != id)
                || self.find_file(parent, new_name).is_some();
            if taken {
                return Err(VfsError::AlreadyExists {
                    name: new_name.to_string(),
                });
            }
        }
        let dir = self.dir_mut(id);
        dir.name = new_name.to_string();
        Ok(())
    }

    /// Move directory `id` to become the last child of `new_parent`.
    pub fn move_dir(&mut self, id: DirId, new_parent: DirId) -> Result<(), VfsError> {
        let name = self.dir(id).name.clone();
        if id == new_parent || self.is_ancestor(id, new_parent) {
            return Err(VfsError::IntoItself { name });
        }
        if self.has_entry(new_parent, &name) {
            return Err(VfsError::AlreadyExists { name });
        }
        if let Some(old_parent) = self.dir(id).parent {
            self.dir_mut(old_parent).subdirectories.retain(|&child| child != id);
        }
        self.dir_mut(new_parent).subdirectories.push(id);
        self.dir_mut(id).parent = Some(new_parent);
        Ok(())
    }

    /// Deep-copy the subtree at `src` as a new child `name` of `parent`.
    ///
    /// Every copied node gets a new identity.
    pub fn copy_dir(&mut self, src: DirId, parent: DirId, name: &str) -> Result<DirId, VfsError> {
        validate_name(name)?;
        if src == parent || self.is_ancestor(src, parent) {
            return Err(VfsError::IntoItself {
                name: self.dir(src).name.clone(),
            });
        }
        if self.has_entry(parent, name) {
            return Err(VfsError::AlreadyExists {
                name: name.to_string(),
            });
        }
        Ok(self.copy_subtree(src, parent, name))
    }

    fn copy_subtree(&mut self, src: DirId, parent: DirId, name: &str) -> DirId {
        let top = self.attach_new_dir(parent, name);
        let mut pending = vec![(src, top)];
        while let Some((from, to)) = pending.pop() {
            let files: Vec<(String, String)> = self
                .dir(from)
                .files
                .iter()
                .map(|f| (f.name.clone(), f.content.clone()))
                .collect();
            for (file_name, content) in files {
                self.add_file(to, &file_name, content);
            }
            let children = self.dir(from).subdirectories.clone();
            for child in children {
                let child_name = self.dir(child).name.clone();
                let copy = self.attach_new_dir(to, &child_name);
                pending.push((child, copy));
            }
        }
        top
    }

    /// Whether `ancestor` lies on the parent chain of `node`.
    pub fn is_ancestor(&self, ancestor: DirId, node: DirId) -> bool {
        let mut current = self.dir(node).parent;
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.dir(id).parent;
        }
        false
    }

    /// Depth-first, pre-order search for a directory called `name`,
    /// starting with `start` itself.
    pub fn find_dir_named(&self, start: DirId, name: &str) -> Option<DirId> {
        let mut pending = vec![start];
        while let Some(id) = pending.pop() {
            let dir = self.dir(id);
            if dir.name == name {
                return Some(id);
            }
            pending.extend(dir.subdirectories.iter().rev());
        }
        None
    }

    /// Total content length of every file under `id`.
    pub fn subtree_size(&self, id: DirId) -> usize {
        let mut total = 0;
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            let dir = self.dir(next);
            total += dir.files.iter().map(File::size).sum::<usize>();
            pending.extend(&dir.subdirectories);
        }
        total
    }

    // ------------------------------------------------------------------
    // Files
    // ------------------------------------------------------------------

    /// Append a new file to `dir`. Callers check for name collisions.
    pub fn add_file(&mut self, dir: DirId, name: &str, content: String) -> FileId {
        let id = FileId(self.next_file_id);
        self.next_file_id += 1;
        let target = self.dir_mut(dir);
        target.files.push(File::new(id, name, content));
        target.modified = chrono::Local::now();
        id
    }

    /// Remove a file from `dir` and hand it back.
    pub fn take_file(&mut self, dir: DirId, name: &str) -> Option<File> {
        let files = &mut self.dir_mut(dir).files;
        let pos = files.iter().position(|f| f.name == name)?;
        Some(files.remove(pos))
    }

    /// Put an existing file into `dir`, replacing a same-named file.
    ///
    /// Returns the replaced file, if any.
    pub fn put_file(&mut self, dir: DirId, file: File) -> Option<File> {
        let replaced = self.take_file(dir, &file.name);
        self.dir_mut(dir).files.push(file);
        replaced
    }

    pub fn rename_file(&mut self, dir: DirId, old: &str, new_name: &str) -> Result<(), VfsError> {
        validate_name(new_name)?;
        if self.find_subdir(dir, new_name).is_some() {
            return Err(VfsError::IsDirectory {
                name: new_name.to_string(),
            });
        }
        let file = self.find_file_mut(dir, old).ok_or_else(|| VfsError::NotFound {
            name: old.to_string(),
        })?;
        file.name = new_name.to_string();
        Ok(())
    }
}
