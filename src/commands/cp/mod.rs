// src/commands/cp/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{resolve_dir, validate_name, VfsError};
use crate::session::ShellState;

pub struct CpCommand;

impl Command for CpCommand {
    fn name(&self) -> &'static str {
        "cp"
    }

    fn summary(&self) -> &'static str {
        "copy a file, or a directory and everything in it"
    }

    fn required_args(&self) -> usize {
        2
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let src = ctx.arg(0).to_string();
        let dst = ctx.arg(1).to_string();
        let state = ctx.state;
        let cwd = state.cwd;

        if let Some(file) = state.tree.find_file(cwd, &src) {
            let content = file.content.clone();
            return copy_file(state, &src, &dst, content);
        }

        if let Some(dir) = state.tree.find_subdir(cwd, &src) {
            if src == dst {
                return CommandResult::error(format!(
                    "cp: cannot copy a directory, '{}', into itself, '{}'",
                    src, dst
                ));
            }
            if state.tree.has_entry(cwd, &dst) {
                return CommandResult::error(format!(
                    "cp: cannot copy '{}': destination '{}' already exists",
                    src, dst
                ));
            }
            return match state.tree.copy_dir(dir, cwd, &dst) {
                Ok(_) => CommandResult::empty(),
                Err(VfsError::IntoItself { .. }) => CommandResult::error(format!(
                    "cp: cannot copy a directory, '{}', into itself, '{}'",
                    src, dst
                )),
                Err(_) => CommandResult::error(format!(
                    "cp: cannot create directory '{}': Invalid argument",
                    dst
                )),
            };
        }

        CommandResult::error(format!(
            "cp: cannot stat '{}': No such file or directory",
            src
        ))
    }
}

/// Copy file content. An existing directory destination receives a
/// same-named file; an existing file destination is overwritten.
fn copy_file(state: &mut ShellState, src: &str, dst: &str, content: String) -> CommandResult {
    let cwd = state.cwd;

    if let Some(target) = resolve_dir(&state.tree, cwd, dst) {
        if target == cwd {
            return CommandResult::error(format!(
                "cp: '{}' and '{}/{}' are the same file",
                src, dst, src
            ));
        }
        if state.tree.find_subdir(target, src).is_some() {
            return CommandResult::error(format!(
                "cp: cannot overwrite directory '{}/{}' with non-directory",
                dst, src
            ));
        }
        match state.tree.find_file_mut(target, src) {
            Some(existing) => existing.write(&content),
            None => {
                state.tree.add_file(target, src, content);
            }
        }
        return CommandResult::empty();
    }

    if src == dst {
        return CommandResult::error(format!("cp: '{}' and '{}' are the same file", src, dst));
    }
    if let Some(existing) = state.tree.find_file_mut(cwd, dst) {
        existing.write(&content);
        return CommandResult::empty();
    }
    if validate_name(dst).is_err() {
        return CommandResult::error(format!(
            "cp: cannot create regular file '{}': Invalid argument",
            dst
        ));
    }
    state.tree.add_file(cwd, dst, content);
    CommandResult::empty()
}
