// src/commands/pwd/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct PwdCommand;

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn summary(&self) -> &'static str {
        "print the current directory path"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::success(ctx.state.current_path())
    }
}
