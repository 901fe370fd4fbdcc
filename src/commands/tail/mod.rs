// src/commands/tail/mod.rs
use crate::commands::utils::{last_lines, parse_line_count};
use crate::commands::{Command, CommandContext, CommandResult};

pub struct TailCommand;

impl Command for TailCommand {
    fn name(&self) -> &'static str {
        "tail"
    }

    fn summary(&self) -> &'static str {
        "print the last n lines of a file"
    }

    fn required_args(&self) -> usize {
        2
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let name = ctx.arg(0);
        let count = match parse_line_count("tail", ctx.arg(1)) {
            Ok(n) => n,
            Err(e) => return e,
        };
        match ctx.state.tree.find_file(ctx.state.cwd, name) {
            Some(file) => CommandResult::success(last_lines(&file.content, count)),
            None => CommandResult::error(format!("tail: {}: No such file or directory", name)),
        }
    }
}
