use crate::commands::{Command, CommandContext, CommandResult};

/// Clears the session back to an empty root. The REPL also stops on it.
pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str { "exit" }

    fn summary(&self) -> &'static str {
        "clear the session and leave"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        ctx.state.reset();
        CommandResult::success("exit: session closed. Start a new session.".to_string())
    }
}

/// Same clearing as `exit`, without ending the REPL.
pub struct ResetCommand;

impl Command for ResetCommand {
    fn name(&self) -> &'static str { "reset" }

    fn summary(&self) -> &'static str {
        "clear the tree, history and side tables"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        ctx.state.reset();
        CommandResult::success("reset: session cleared".to_string())
    }
}
