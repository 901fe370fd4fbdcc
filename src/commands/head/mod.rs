// src/commands/head/mod.rs
use crate::commands::utils::{first_lines, parse_line_count};
use crate::commands::{Command, CommandContext, CommandResult};

pub struct HeadCommand;

impl Command for HeadCommand {
    fn name(&self) -> &'static str {
        "head"
    }

    fn summary(&self) -> &'static str {
        "print the first n lines of a file"
    }

    fn required_args(&self) -> usize {
        2
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let name = ctx.arg(0);
        let count = match parse_line_count("head", ctx.arg(1)) {
            Ok(n) => n,
            Err(e) => return e,
        };
        match ctx.state.tree.find_file(ctx.state.cwd, name) {
            Some(file) => CommandResult::success(first_lines(&file.content, count)),
            None => CommandResult::error(format!("head: {}: No such file or directory", name)),
        }
    }
}
