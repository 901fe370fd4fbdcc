use crate::commands::{Command, CommandContext, CommandResult};

/// Accepts any owner for an existing entry. Ownership is not recorded.
pub struct ChownCommand;

impl Command for ChownCommand {
    fn name(&self) -> &'static str {
        "chown"
    }

    fn summary(&self) -> &'static str {
        "change an entry's owner (accepted, not recorded)"
    }

    fn required_args(&self) -> usize {
        2
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let name = ctx.arg(1);
        if ctx.state.tree.has_entry(ctx.state.cwd, name) {
            CommandResult::empty()
        } else {
            CommandResult::error(format!(
                "chown: cannot access '{}': No such file or directory",
                name
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{new_state, run};

    #[test]
    fn test_chown_existing_entries() {
        let mut state = new_state();
        let root = state.tree.root();
        state.tree.add_file(root, "f", String::new());
        state.tree.create_dir(root, "d").unwrap();
        assert!(run(&ChownCommand, &mut state, &["alice", "f"]).is_success());
        assert!(run(&ChownCommand, &mut state, &["alice", "d"]).is_success());
    }

    #[test]
    fn test_chown_missing() {
        let mut state = new_state();
        let result = run(&ChownCommand, &mut state, &["alice", "f"]);
        assert_eq!(result.stderr, "chown: cannot access 'f': No such file or directory");
    }
}
