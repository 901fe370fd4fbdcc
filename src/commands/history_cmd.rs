use crate::commands::{Command, CommandContext, CommandResult};

pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn name(&self) -> &'static str { "history" }

    fn summary(&self) -> &'static str {
        "list every command entered this session"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let lines: Vec<&str> = ctx.state.history.entries().collect();
        CommandResult::success(lines.join("\n"))
    }
}
