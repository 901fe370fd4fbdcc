use crate::commands::{Command, CommandContext, CommandResult};

pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str { "help" }

    fn summary(&self) -> &'static str {
        "show this list"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let mut stdout = String::from("Available commands:");
        for cmd in ctx.registry.iter() {
            stdout.push_str(&format!("\n  {:<8} {}", cmd.name(), cmd.summary()));
        }
        CommandResult::success(stdout)
    }
}
