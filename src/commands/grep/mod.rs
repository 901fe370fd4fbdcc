// src/commands/grep/mod.rs
use crate::commands::utils::{split_lines, strip_enclosing_quotes};
use crate::commands::{Command, CommandContext, CommandResult};

pub struct GrepCommand;

impl Command for GrepCommand {
    fn name(&self) -> &'static str {
        "grep"
    }

    fn summary(&self) -> &'static str {
        "print the lines of a file containing a term"
    }

    fn required_args(&self) -> usize {
        2
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let term = strip_enclosing_quotes(ctx.arg(0));
        let name = ctx.arg(1);
        let Some(file) = ctx.state.tree.find_file(ctx.state.cwd, name) else {
            return CommandResult::error(format!("grep: {}: No such file or directory", name));
        };

        let matches: Vec<&str> = split_lines(&file.content)
            .into_iter()
            .filter(|line| line.contains(term))
            .collect();
        if matches.is_empty() {
            return CommandResult::error(format!("grep: no matches found for '{}'", term));
        }
        CommandResult::success(matches.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{new_state, run};

    fn state_with(content: &str) -> crate::session::ShellState {
        let mut state = new_state();
        let root = state.tree.root();
        state.tree.add_file(root, "log", content.to_string());
        state
    }

    #[test]
    fn test_grep_literal_substring() {
        let mut state = state_with("error: one\nok\nerror: two");
        let result = run(&GrepCommand, &mut state, &["error", "log"]);
        assert_eq!(result.stdout, "error: one\nerror: two");
    }

    #[test]
    fn test_grep_no_regex() {
        let mut state = state_with("a.c\nabc");
        let result = run(&GrepCommand, &mut state, &["a.c", "log"]);
        assert_eq!(result.stdout, "a.c");
    }

    #[test]
    fn test_grep_no_matches() {
        let mut state = state_with("nothing here");
        let result = run(&GrepCommand, &mut state, &["\"zzz\"", "log"]);
        assert_eq!(result.stderr, "grep: no matches found for 'zzz'");
    }

    #[test]
    fn test_grep_missing_file() {
        let mut state = new_state();
        let result = run(&GrepCommand, &mut state, &["x", "log"]);
        assert_eq!(result.stderr, "grep: log: No such file or directory");
    }
}
