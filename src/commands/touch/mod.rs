// src/commands/touch/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::validate_name;

pub struct TouchCommand;

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn summary(&self) -> &'static str {
        "create an empty file if it does not exist"
    }

    fn required_args(&self) -> usize {
        1
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let name = ctx.arg(0).to_string();
        let state = ctx.state;
        let cwd = state.cwd;

        if state.tree.has_entry(cwd, &name) {
            return CommandResult::empty();
        }
        if validate_name(&name).is_err() {
            return CommandResult::error(format!(
                "touch: cannot touch '{}': Invalid argument",
                name
            ));
        }
        state.tree.add_file(cwd, &name, String::new());
        CommandResult::empty()
    }
}
