use crate::commands::{Command, CommandContext, CommandResult};

pub struct RmdirCommand;

impl Command for RmdirCommand {
    fn name(&self) -> &'static str {
        "rmdir"
    }

    fn summary(&self) -> &'static str {
        "remove an empty directory"
    }

    fn required_args(&self) -> usize {
        1
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let name = ctx.arg(0).to_string();
        let state = ctx.state;

        let Some(dir) = state.tree.find_subdir(state.cwd, &name) else {
            return CommandResult::error(format!(
                "rmdir: failed to remove '{}': No such file or directory",
                name
            ));
        };
        match state.tree.remove_empty_dir(dir) {
            Ok(()) => CommandResult::empty(),
            Err(_) => CommandResult::error(format!(
                "rmdir: failed to remove '{}': Directory not empty",
                name
            )),
        }
    }
}
