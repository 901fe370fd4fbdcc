use crate::commands::{Command, CommandContext, CommandResult};

pub struct DuCommand;

impl Command for DuCommand {
    fn name(&self) -> &'static str {
        "du"
    }

    fn summary(&self) -> &'static str {
        "total content size of a directory tree (. for here)"
    }

    fn required_args(&self) -> usize {
        1
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let name = ctx.arg(0);
        let tree = &ctx.state.tree;
        let cwd = ctx.state.cwd;

        let target = if name == "." {
            Some(cwd)
        } else {
            tree.find_subdir(cwd, name)
        };
        match target {
            Some(dir) => CommandResult::success(format!(
                "Directory size: {} bytes",
                tree.subtree_size(dir)
            )),
            None => CommandResult::error(format!(
                "du: cannot access '{}': No such file or directory",
                name
            )),
        }
    }
}
