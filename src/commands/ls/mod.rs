// src/commands/ls/mod.rs
use chrono::{DateTime, Local};

use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{resolve_dir, DirId, PermissionTable, VirtualTree, DIRECTORY_MODE};

const COLUMNS: usize = 4;
const COLUMN_WIDTH: usize = 15;
const DIR_SIZE: usize = 4096;

pub struct LsCommand;

struct Entry<'a> {
    name: String,
    mode: &'static str,
    size: usize,
    modified: &'a DateTime<Local>,
}

fn format_time(time: &DateTime<Local>) -> String {
    time.format("%b %d %H:%M").to_string()
}

/// Directories first, then files; each group sorted by name.
fn collect_entries<'a>(
    tree: &'a VirtualTree,
    permissions: &PermissionTable,
    dir: DirId,
) -> Vec<Entry<'a>> {
    let node = tree.dir(dir);
    let mut dirs: Vec<Entry<'a>> = node
        .subdirectories
        .iter()
        .map(|&child| {
            let child = tree.dir(child);
            Entry {
                name: format!("{}/", child.name),
                mode: DIRECTORY_MODE,
                size: DIR_SIZE,
                modified: &child.modified,
            }
        })
        .collect();
    let mut files: Vec<Entry<'a>> = node
        .files
        .iter()
        .map(|file| Entry {
            name: file.name.clone(),
            mode: permissions.get(file.id),
            size: file.size(),
            modified: &file.modified,
        })
        .collect();

    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    files.sort_by(|a, b| a.name.cmp(&b.name));
    dirs.extend(files);
    dirs
}

fn format_short(entries: &[Entry<'_>]) -> String {
    entries
        .chunks(COLUMNS)
        .map(|row| {
            row.iter()
                .map(|e| format!("{:<width$}", e.name, width = COLUMN_WIDTH))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_long(entries: &[Entry<'_>]) -> String {
    entries
        .iter()
        .map(|e| {
            format!(
                "{}  user  root  {:>4}  {}  {}",
                e.mode,
                e.size,
                format_time(e.modified),
                e.name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn summary(&self) -> &'static str {
        "list a directory; -l for the long format"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let mut long = false;
        let mut target: Option<&str> = None;
        for arg in ctx.args.iter().flat_map(|a| a.split_whitespace()) {
            if let Some(flags) = arg.strip_prefix('-').filter(|f| !f.is_empty()) {
                for flag in flags.chars() {
                    match flag {
                        'l' => long = true,
                        other => {
                            return CommandResult::error(format!(
                                "ls: invalid option -- '{}'",
                                other
                            ))
                        }
                    }
                }
            } else {
                target = Some(arg);
            }
        }

        let tree = &ctx.state.tree;
        let dir = match target {
            Some(path) => match resolve_dir(tree, ctx.state.cwd, path) {
                Some(dir) => dir,
                None => {
                    return CommandResult::error(format!(
                        "ls: cannot access '{}': No such file or directory",
                        path
                    ))
                }
            },
            None => ctx.state.cwd,
        };

        let entries = collect_entries(tree, &ctx.state.permissions, dir);
        let output = if long {
            format_long(&entries)
        } else {
            format_short(&entries)
        };
        CommandResult::success(output)
    }
}
