// src/commands/find/mod.rs
use crate::commands::utils::strip_enclosing_quotes;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{resolve_dir, DirId, VirtualTree};

const USAGE: &str = "find: invalid syntax. Usage: find <directory> -name <name>";

pub struct FindCommand;

impl Command for FindCommand {
    fn name(&self) -> &'static str {
        "find"
    }

    fn summary(&self) -> &'static str {
        "find <dir> -name <name>: search a directory tree by exact name"
    }

    fn required_args(&self) -> usize {
        2
    }

    fn missing_operand(&self) -> String {
        USAGE.to_string()
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let dir_name = ctx.arg(0);
        let mut expr = ctx.arg(1).split_whitespace();
        let term = match (expr.next(), expr.next(), expr.next()) {
            (Some("-name"), Some(term), None) => strip_enclosing_quotes(term),
            _ => return CommandResult::error(USAGE.to_string()),
        };

        let tree = &ctx.state.tree;
        let Some(start) = search_root(tree, ctx.state.cwd, dir_name) else {
            return CommandResult::error(format!(
                "find: '{}': No such file or directory",
                dir_name
            ));
        };

        let matches = search(tree, start, term);
        tracing::debug!(dir = %dir_name, term, found = matches.len(), "find finished");

        if matches.is_empty() {
            return CommandResult::error(format!("find: no matches found for '{}'", term));
        }
        CommandResult::success(matches.join("\n"))
    }
}

/// `.`, `~` and `/` all search from the root. Other names are tried as a
/// path from the current directory, then as a directory name anywhere in
/// the tree.
fn search_root(tree: &VirtualTree, cwd: DirId, name: &str) -> Option<DirId> {
    match name {
        "." | "~" | "/" => Some(tree.root()),
        _ => resolve_dir(tree, cwd, name).or_else(|| tree.find_dir_named(tree.root(), name)),
    }
}

/// Pre-order walk from `start`. Within a directory its files are checked
/// before its subdirectories, and each subdirectory is matched just before
/// its own contents are searched.
fn search(tree: &VirtualTree, start: DirId, term: &str) -> Vec<String> {
    let mut matches = Vec::new();
    let mut pending = vec![start];

    while let Some(dir) = pending.pop() {
        let node = tree.dir(dir);
        if dir != start && node.name == term {
            matches.push(display_path(tree, start, dir));
        }
        if node.files.iter().any(|f| f.name == term) {
            let base = display_path(tree, start, dir);
            for file in node.files.iter().filter(|f| f.name == term) {
                matches.push(format!("{}/{}", base, file.name));
            }
        }
        pending.extend(node.subdirectories.iter().rev());
    }
    matches
}

/// `dir` as seen from the search root, labelled with the root's own name.
fn display_path(tree: &VirtualTree, start: DirId, dir: DirId) -> String {
    let mut names = Vec::new();
    let mut current = dir;
    loop {
        names.push(tree.dir(current).name.as_str());
        match tree.dir(current).parent {
            Some(parent) if current != start => current = parent,
            _ => break,
        }
    }
    names.reverse();
    names.join("/")
}
