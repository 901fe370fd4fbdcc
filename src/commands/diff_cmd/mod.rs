// src/commands/diff_cmd/mod.rs
use crate::commands::utils::split_lines;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct DiffCommand;

impl Command for DiffCommand {
    fn name(&self) -> &'static str {
        "diff"
    }

    fn summary(&self) -> &'static str {
        "compare two files line by line"
    }

    fn required_args(&self) -> usize {
        2
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let tree = &ctx.state.tree;
        let cwd = ctx.state.cwd;
        let mut contents = Vec::with_capacity(2);
        for name in [ctx.arg(0), ctx.arg(1)] {
            match tree.find_file(cwd, name) {
                Some(file) => contents.push(file.content.as_str()),
                None => {
                    return CommandResult::error(format!(
                        "diff: {}: No such file or directory",
                        name
                    ))
                }
            }
        }

        let output = compare_lines(contents[0], contents[1]);
        if output.is_empty() {
            return CommandResult::success("diff: no differences found".to_string());
        }
        CommandResult::success(output.join("\n"))
    }
}

/// `< a` / `> b` pairs for every differing line position. The shorter side
/// contributes empty lines.
fn compare_lines(a: &str, b: &str) -> Vec<String> {
    let left = split_lines(a);
    let right = split_lines(b);
    let len = left.len().max(right.len());

    let mut output = Vec::new();
    for i in 0..len {
        let l = left.get(i).copied().unwrap_or("");
        let r = right.get(i).copied().unwrap_or("");
        if l != r {
            output.push(format!("< {}", l));
            output.push(format!("> {}", r));
        }
    }
    output
}
