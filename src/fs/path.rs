//! Path resolution over the virtual tree.

use super::tree::VirtualTree;
use super::types::DirId;

/// Display path of `id`, e.g. `~/a/b`.
///
/// Builds `/<name>` for every directory from the root down, then drops the
/// slash in front of the root's name.
pub fn absolute_path(tree: &VirtualTree, id: DirId) -> String {
    let mut names = Vec::new();
    let mut current = Some(id);
    while let Some(dir) = current {
        names.push(tree.dir(dir).name.as_str());
        current = tree.dir(dir).parent;
    }

    let mut path = String::new();
    for name in names.iter().rev() {
        path.push('/');
        path.push_str(name);
    }
    match path.strip_prefix('/') {
        Some(rest) => rest.to_string(),
        None => path,
    }
}

/// Split `path` into its starting directory and the remaining relative part.
///
/// A leading `/`, the bare root name, or `<root>/` start at the root;
/// anything else is relative to `cwd`.
pub fn split_start<'p>(tree: &VirtualTree, cwd: DirId, path: &'p str) -> (DirId, &'p str) {
    let root_name = tree.root_name();
    if path == root_name {
        return (tree.root(), "");
    }
    if let Some(rest) = path.strip_prefix('/') {
        return (tree.root(), rest);
    }
    if let Some(rest) = path
        .strip_prefix(root_name)
        .and_then(|rest| rest.strip_prefix('/'))
    {
        return (tree.root(), rest);
    }
    (cwd, path)
}

/// Non-empty segments of a relative path, with `.` dropped.
pub fn segments(path: &str) -> Vec<&str> {
    path.split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect()
}

/// Resolve a directory path the way `cd` does.
///
/// `..` stops at the root; every other segment must name an immediate
/// subdirectory.
pub fn resolve_dir(tree: &VirtualTree, cwd: DirId, path: &str) -> Option<DirId> {
    let (mut current, rest) = split_start(tree, cwd, path);
    for segment in segments(rest) {
        current = if segment == ".." {
            tree.dir(current).parent.unwrap_or(current)
        } else {
            tree.find_subdir(current, segment)?
        };
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (VirtualTree, DirId) {
        let mut tree = VirtualTree::new("~");
        let root = tree.root();
        let c = tree.create_dir_all(root, &["a", "b", "c"]).unwrap();
        (tree, c)
    }

    #[test]
    fn test_absolute_path_root() {
        let tree = VirtualTree::new("~");
        assert_eq!(absolute_path(&tree, tree.root()), "~");
    }

    #[test]
    fn test_absolute_path_nested() {
        let (tree, c) = sample();
        assert_eq!(absolute_path(&tree, c), "~/a/b/c");
    }

    #[test]
    fn test_resolve_dir_relative_and_parent() {
        let (tree, c) = sample();
        let root = tree.root();
        assert_eq!(resolve_dir(&tree, root, "a/b/c"), Some(c));
        let b = tree.dir(c).parent.unwrap();
        assert_eq!(resolve_dir(&tree, c, ".."), Some(b));
        assert_eq!(resolve_dir(&tree, root, ".."), Some(root));
        assert_eq!(resolve_dir(&tree, root, "a/missing"), None);
    }

    #[test]
    fn test_resolve_dir_root_markers() {
        let (tree, c) = sample();
        let root = tree.root();
        assert_eq!(resolve_dir(&tree, c, "/"), Some(root));
        assert_eq!(resolve_dir(&tree, c, "~"), Some(root));
        assert_eq!(resolve_dir(&tree, c, "~/a/b/c"), Some(c));
        assert_eq!(resolve_dir(&tree, c, "/a/b/c"), Some(c));
    }

    #[test]
    fn test_segments() {
        assert_eq!(segments("a//b/./c/"), vec!["a", "b", "c"]);
        assert!(segments("").is_empty());
    }
}
