// src/commands/cat/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn summary(&self) -> &'static str {
        "print a file's content"
    }

    fn required_args(&self) -> usize {
        1
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let name = ctx.arg(0);
        match ctx.state.tree.find_file(ctx.state.cwd, name) {
            Some(file) => CommandResult::success(file.content.clone()),
            None if ctx.state.tree.find_subdir(ctx.state.cwd, name).is_some() => {
                CommandResult::error(format!("cat: {}: Is a directory", name))
            }
            None => CommandResult::error(format!("cat: {}: No such file or directory", name)),
        }
    }
}
