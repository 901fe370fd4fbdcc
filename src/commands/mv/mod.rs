// src/commands/mv/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{resolve_dir, validate_name, VfsError};
use crate::session::ShellState;

pub struct MvCommand;

impl Command for MvCommand {
    fn name(&self) -> &'static str {
        "mv"
    }

    fn summary(&self) -> &'static str {
        "move an entry into a directory, or rename it"
    }

    fn required_args(&self) -> usize {
        2
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let src = ctx.arg(0).to_string();
        let dst = ctx.arg(1).to_string();
        move_entry(self.name(), ctx.state, &src, &dst)
    }
}

/// `rename` behaves exactly like `mv`; only the verb in messages differs.
pub struct RenameCommand;

impl Command for RenameCommand {
    fn name(&self) -> &'static str {
        "rename"
    }

    fn summary(&self) -> &'static str {
        "same as mv"
    }

    fn required_args(&self) -> usize {
        2
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let src = ctx.arg(0).to_string();
        let dst = ctx.arg(1).to_string();
        move_entry(self.name(), ctx.state, &src, &dst)
    }
}

/// Move `src` (a child of the current directory) into the directory `dst`
/// resolves to, or rename it to `dst` when no such directory exists.
/// Directories are looked up before files.
fn move_entry(verb: &str, state: &mut ShellState, src: &str, dst: &str) -> CommandResult {
    let cwd = state.cwd;
    let src_dir = state.tree.find_subdir(cwd, src);
    if src_dir.is_none() && state.tree.find_file(cwd, src).is_none() {
        return CommandResult::error(format!(
            "{}: cannot stat '{}': No such file or directory",
            verb, src
        ));
    }
    let target = resolve_dir(&state.tree, cwd, dst);

    match (src_dir, target) {
        (Some(dir), Some(target)) => match state.tree.move_dir(dir, target) {
            Ok(()) => CommandResult::empty(),
            Err(VfsError::IntoItself { .. }) => CommandResult::error(format!(
                "{}: cannot move '{}' to a subdirectory of itself, '{}/{}'",
                verb, src, dst, src
            )),
            Err(_) => CommandResult::error(format!(
                "{}: cannot move '{}' to '{}/{}': File exists",
                verb, src, dst, src
            )),
        },
        (None, Some(target)) => {
            if target == cwd {
                return CommandResult::empty();
            }
            if state.tree.find_subdir(target, src).is_some() {
                return CommandResult::error(format!(
                    "{}: cannot overwrite directory '{}/{}' with non-directory",
                    verb, dst, src
                ));
            }
            let Some(file) = state.tree.take_file(cwd, src) else {
                return CommandResult::empty();
            };
            if let Some(replaced) = state.tree.put_file(target, file) {
                state.forget_files([replaced.id]);
            }
            CommandResult::empty()
        }
        (Some(dir), None) => match state.tree.rename_dir(dir, dst) {
            Ok(()) => CommandResult::empty(),
            Err(VfsError::AlreadyExists { .. }) => CommandResult::error(format!(
                "{}: cannot overwrite non-directory '{}' with directory '{}'",
                verb, dst, src
            )),
            Err(_) => invalid_target(verb, src, dst),
        },
        (None, None) => {
            if src == dst {
                return CommandResult::empty();
            }
            let replaced = state.tree.find_file(cwd, dst).map(|f| f.id);
            if validate_name(dst).is_err() {
                return invalid_target(verb, src, dst);
            }
            if let Some(id) = replaced {
                state.tree.take_file(cwd, dst);
                state.forget_files([id]);
            }
            match state.tree.rename_file(cwd, src, dst) {
                Ok(()) => CommandResult::empty(),
                Err(_) => invalid_target(verb, src, dst),
            }
        }
    }
}

fn invalid_target(verb: &str, src: &str, dst: &str) -> CommandResult {
    CommandResult::error(format!(
        "{}: cannot move '{}' to '{}': Invalid argument",
        verb, src, dst
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{new_state, run};

    #[test]
    fn test_rename_file() {
        let mut state = new_state();
        let root = state.tree.root();
        state.tree.add_file(root, "a.txt", "hi".to_string());
        let result = run(&MvCommand, &mut state, &["a.txt", "b.txt"]);
        assert!(result.is_success());
        assert!(state.tree.find_file(root, "a.txt").is_none());
        assert_eq!(state.tree.find_file(root, "b.txt").unwrap().content, "hi");
    }

    #[test]
    fn test_rename_keeps_file_identity() {
        let mut state = new_state();
        let root = state.tree.root();
        let id = state.tree.add_file(root, "a", String::new());
        state.permissions.set(id, "-rwxrwxrwx");
        run(&RenameCommand, &mut state, &["a", "b"]);
        let renamed = state.tree.find_file(root, "b").unwrap();
        assert_eq!(state.permissions.get(renamed.id), "-rwxrwxrwx");
    }

    #[test]
    fn test_move_file_into_directory() {
        let mut state = new_state();
        let root = state.tree.root();
        let docs = state.tree.create_dir(root, "docs").unwrap();
        state.tree.add_file(root, "f", "x".to_string());
        let result = run(&MvCommand, &mut state, &["f", "docs"]);
        assert!(result.is_success());
        assert!(state.tree.find_file(root, "f").is_none());
        assert!(state.tree.find_file(docs, "f").is_some());
    }

    #[test]
    fn test_move_file_to_parent() {
        let mut state = new_state();
        let root = state.tree.root();
        let docs = state.tree.create_dir(root, "docs").unwrap();
        state.tree.add_file(docs, "f", String::new());
        state.cwd = docs;
        run(&MvCommand, &mut state, &["f", ".."]);
        assert!(state.tree.find_file(root, "f").is_some());
    }

    #[test]
    fn test_move_directory_into_sibling() {
        let mut state = new_state();
        let root = state.tree.root();
        let a = state.tree.create_dir(root, "a").unwrap();
        let b = state.tree.create_dir(root, "b").unwrap();
        state.tree.add_file(a, "inside", String::new());
        let result = run(&MvCommand, &mut state, &["a", "b"]);
        assert!(result.is_success());
        assert_eq!(state.tree.find_subdir(b, "a"), Some(a));
        assert_eq!(state.tree.dir(a).parent, Some(b));
        assert!(state.tree.find_file(a, "inside").is_some());
    }

    #[test]
    fn test_move_directory_into_itself() {
        let mut state = new_state();
        let root = state.tree.root();
        let a = state.tree.create_dir(root, "a").unwrap();
        let result = run(&MvCommand, &mut state, &["a", "a"]);
        assert_eq!(
            result.stderr,
            "mv: cannot move 'a' to a subdirectory of itself, 'a/a'"
        );
        assert_eq!(state.tree.dir(a).parent, Some(root));
    }

    #[test]
    fn test_move_directory_into_descendant() {
        let mut state = new_state();
        let root = state.tree.root();
        let a = state.tree.create_dir(root, "a").unwrap();
        state.tree.create_dir(a, "b").unwrap();
        let result = run(&MvCommand, &mut state, &["a", "a/b"]);
        assert_eq!(result.exit_code, 1);
        assert_eq!(state.tree.dir(a).parent, Some(root));
    }

    #[test]
    fn test_rename_directory() {
        let mut state = new_state();
        let root = state.tree.root();
        let a = state.tree.create_dir(root, "a").unwrap();
        run(&RenameCommand, &mut state, &["a", "z"]);
        assert_eq!(state.tree.find_subdir(root, "z"), Some(a));
    }

    #[test]
    fn test_directory_onto_file_fails() {
        let mut state = new_state();
        let root = state.tree.root();
        state.tree.create_dir(root, "a").unwrap();
        state.tree.add_file(root, "f", String::new());
        let result = run(&MvCommand, &mut state, &["a", "f"]);
        assert_eq!(
            result.stderr,
            "mv: cannot overwrite non-directory 'f' with directory 'a'"
        );
    }

    #[test]
    fn test_file_onto_file_replaces() {
        let mut state = new_state();
        let root = state.tree.root();
        state.tree.add_file(root, "a", "new".to_string());
        let old = state.tree.add_file(root, "b", "old".to_string());
        state.permissions.set(old, "-rwxr-xr-x");
        run(&MvCommand, &mut state, &["a", "b"]);
        assert_eq!(state.tree.dir(root).files.len(), 1);
        assert_eq!(state.tree.find_file(root, "b").unwrap().content, "new");
        assert!(state.permissions.is_empty());
    }

    #[test]
    fn test_missing_source() {
        let mut state = new_state();
        let result = run(&RenameCommand, &mut state, &["ghost", "x"]);
        assert_eq!(
            result.stderr,
            "rename: cannot stat 'ghost': No such file or directory"
        );
    }
}
