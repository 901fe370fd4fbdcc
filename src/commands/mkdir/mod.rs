// src/commands/mkdir/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{segments, split_start, VfsError};

pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn summary(&self) -> &'static str {
        "create a directory; a/b/c or -p creates missing parents"
    }

    fn required_args(&self) -> usize {
        1
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let (parents, path) = match ctx.arg(0) {
            "-p" | "--parents" => (true, ctx.arg(1).to_string()),
            other => (other.contains('/'), other.to_string()),
        };
        if path.is_empty() {
            return CommandResult::error(self.missing_operand());
        }

        let state = ctx.state;
        let result = if parents {
            let (start, rest) = split_start(&state.tree, state.cwd, &path);
            state.tree.create_dir_all(start, &segments(rest))
        } else {
            state.tree.create_dir(state.cwd, &path)
        };

        match result {
            Ok(_) => CommandResult::empty(),
            Err(VfsError::AlreadyExists { .. }) => CommandResult::error(format!(
                "mkdir: cannot create directory '{}': File exists",
                path
            )),
            Err(_) => CommandResult::error(format!(
                "mkdir: cannot create directory '{}': Invalid argument",
                path
            )),
        }
    }
}
