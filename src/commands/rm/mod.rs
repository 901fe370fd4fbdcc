// src/commands/rm/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct RmCommand;

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn summary(&self) -> &'static str {
        "remove a file, or a directory with everything in it"
    }

    fn required_args(&self) -> usize {
        1
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let name = ctx.arg(0).to_string();
        let state = ctx.state;
        let cwd = state.cwd;

        if let Some(file) = state.tree.take_file(cwd, &name) {
            state.forget_files([file.id]);
            return CommandResult::empty();
        }

        if let Some(dir) = state.tree.find_subdir(cwd, &name) {
            let removed = state.tree.remove_dir(dir);
            tracing::debug!(dir = %name, files = removed.len(), "removed directory tree");
            state.forget_files(removed);
            return CommandResult::empty();
        }

        CommandResult::error(format!(
            "rm: cannot remove '{}': No such file or directory",
            name
        ))
    }
}
