// src/commands/wc/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct WcCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Counts {
    lines: usize,
    words: usize,
    chars: usize,
}

fn count(content: &str) -> Counts {
    Counts {
        lines: content.lines().count(),
        words: content.split_whitespace().count(),
        chars: content.len(),
    }
}

impl Command for WcCommand {
    fn name(&self) -> &'static str {
        "wc"
    }

    fn summary(&self) -> &'static str {
        "count lines, words and characters in a file"
    }

    fn required_args(&self) -> usize {
        1
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let name = ctx.arg(0);
        let Some(file) = ctx.state.tree.find_file(ctx.state.cwd, name) else {
            return CommandResult::error(format!("wc: {}: No such file or directory", name));
        };
        let c = count(&file.content);
        CommandResult::success(format!("{} {} {} {}", c.lines, c.words, c.chars, name))
    }
}
