use indexmap::IndexSet;

use crate::commands::utils::strip_enclosing_quotes;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{normalize_archive_name, ArchivedFile, Snapshot};

/// Snapshots files into the in-memory archive store. No compression.
pub struct ZipCommand;

impl Command for ZipCommand {
    fn name(&self) -> &'static str {
        "zip"
    }

    fn summary(&self) -> &'static str {
        "zip <archive> <file>...: snapshot files into an archive"
    }

    fn required_args(&self) -> usize {
        2
    }

    fn missing_operand(&self) -> String {
        "zip: missing operand".to_string()
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let archive = normalize_archive_name(ctx.arg(0));
        let items: IndexSet<String> = ctx
            .arg(1)
            .split_whitespace()
            .map(|item| strip_enclosing_quotes(item).to_string())
            .filter(|item| !item.is_empty())
            .collect();
        if items.is_empty() {
            return CommandResult::error(self.missing_operand());
        }

        let state = ctx.state;
        let mut snapshot = Snapshot::default();
        for item in &items {
            match state.tree.find_file(state.cwd, item) {
                Some(file) => snapshot.files.push(ArchivedFile {
                    name: file.name.clone(),
                    content: file.content.clone(),
                }),
                None => {
                    return CommandResult::error(format!(
                        "zip: {}: No such file or directory",
                        item
                    ))
                }
            }
        }

        tracing::debug!(archive = %archive, files = snapshot.len(), "archive created");
        state.archives.insert(archive.clone(), snapshot);
        CommandResult::success(format!("Files compressed into '{}'", archive))
    }
}

/// Restores an archive's files into the current directory. The archive
/// stays in the store.
pub struct UnzipCommand;

impl Command for UnzipCommand {
    fn name(&self) -> &'static str {
        "unzip"
    }

    fn summary(&self) -> &'static str {
        "restore an archive's files into the current directory"
    }

    fn required_args(&self) -> usize {
        1
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let archive = normalize_archive_name(ctx.arg(0));
        let state = ctx.state;
        let Some(snapshot) = state.archives.get(&archive) else {
            return CommandResult::error(format!("unzip: cannot find or open '{}'", archive));
        };

        let cwd = state.cwd;
        let mut lines = Vec::new();
        let mut extracted = 0;
        for file in &snapshot.files {
            if state.tree.has_entry(cwd, &file.name) {
                lines.push(format!("unzip: skipping '{}': file already exists", file.name));
                continue;
            }
            state.tree.add_file(cwd, &file.name, file.content.clone());
            extracted += 1;
        }

        lines.push(format!("unzip: {} files extracted from {}", extracted, archive));
        CommandResult::success(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{new_state, run};

    #[test]
    fn test_zip_snapshots_files() {
        let mut state = new_state();
        let root = state.tree.root();
        state.tree.add_file(root, "a", "1".to_string());
        state.tree.add_file(root, "b", "2".to_string());
        let result = run(&ZipCommand, &mut state, &["bundle", "a b a"]);
        assert_eq!(result.stdout, "Files compressed into 'bundle.zip'");
        let snapshot = state.archives.get("bundle.zip").unwrap();
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn test_zip_missing_file_aborts() {
        let mut state = new_state();
        let root = state.tree.root();
        state.tree.add_file(root, "a", String::new());
        let result = run(&ZipCommand, &mut state, &["x.zip", "a ghost"]);
        assert_eq!(result.stderr, "zip: ghost: No such file or directory");
        assert!(state.archives.is_empty());
    }

    #[test]
    fn test_zip_skips_directories() {
        let mut state = new_state();
        let root = state.tree.root();
        state.tree.create_dir(root, "d").unwrap();
        let result = run(&ZipCommand, &mut state, &["x", "d"]);
        assert_eq!(result.stderr, "zip: d: No such file or directory");
    }

    #[test]
    fn test_snapshot_isolated_from_later_edits() {
        let mut state = new_state();
        let root = state.tree.root();
        state.tree.add_file(root, "f", "before".to_string());
        run(&ZipCommand, &mut state, &["a.zip", "f"]);
        state.tree.find_file_mut(root, "f").unwrap().write("after");

        let empty = state.tree.create_dir(root, "empty").unwrap();
        state.cwd = empty;
        let result = run(&UnzipCommand, &mut state, &["a.zip"]);
        assert_eq!(result.stdout, "unzip: 1 files extracted from a.zip");
        assert_eq!(state.tree.find_file(empty, "f").unwrap().content, "before");
    }

    #[test]
    fn test_unzip_refuses_conflicts() {
        let mut state = new_state();
        let root = state.tree.root();
        state.tree.add_file(root, "a", "archived".to_string());
        state.tree.add_file(root, "b", "archived".to_string());
        run(&ZipCommand, &mut state, &["x", "a b"]);
        state.tree.find_file_mut(root, "a").unwrap().write("local");
        state.tree.take_file(root, "b");

        let result = run(&UnzipCommand, &mut state, &["x"]);
        assert_eq!(
            result.stdout,
            "unzip: skipping 'a': file already exists\nunzip: 1 files extracted from x.zip"
        );
        assert_eq!(state.tree.find_file(root, "a").unwrap().content, "local");
        assert_eq!(state.tree.find_file(root, "b").unwrap().content, "archived");
    }

    #[test]
    fn test_unzip_unknown_archive() {
        let mut state = new_state();
        let result = run(&UnzipCommand, &mut state, &["nope"]);
        assert_eq!(result.stderr, "unzip: cannot find or open 'nope.zip'");
    }
}
