use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::resolve_dir;

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn summary(&self) -> &'static str {
        "change the current directory (.., /, ~ or a path)"
    }

    fn required_args(&self) -> usize {
        1
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let target = ctx.arg(0).to_string();
        let state = ctx.state;

        match resolve_dir(&state.tree, state.cwd, &target) {
            Some(dir) => {
                state.cwd = dir;
                CommandResult::empty()
            }
            None => CommandResult::error(format!("cd: no such file or directory: {}", target)),
        }
    }
}
