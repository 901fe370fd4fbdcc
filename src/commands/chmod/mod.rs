// src/commands/chmod/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::symbolic_mode;

pub struct ChmodCommand;

impl Command for ChmodCommand {
    fn name(&self) -> &'static str {
        "chmod"
    }

    fn summary(&self) -> &'static str {
        "set a file's simulated permissions (777, 755 or 644)"
    }

    fn required_args(&self) -> usize {
        2
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let mode = symbolic_mode(ctx.arg(0));
        let name = ctx.arg(1).to_string();
        let state = ctx.state;

        let Some(file) = state.tree.find_file(state.cwd, &name) else {
            return CommandResult::error(format!(
                "chmod: cannot access '{}': No such file or directory",
                name
            ));
        };
        let id = file.id;
        state.permissions.set(id, mode);
        CommandResult::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{new_state, run};
    use crate::fs::DEFAULT_FILE_MODE;

    #[test]
    fn test_chmod_sets_mode() {
        let mut state = new_state();
        let root = state.tree.root();
        let id = state.tree.add_file(root, "f", String::new());
        let result = run(&ChmodCommand, &mut state, &["755", "f"]);
        assert!(result.is_success());
        assert_eq!(state.permissions.get(id), "-rwxr-xr-x");
    }

    #[test]
    fn test_unknown_mode_falls_back_to_default() {
        let mut state = new_state();
        let root = state.tree.root();
        let id = state.tree.add_file(root, "f", String::new());
        run(&ChmodCommand, &mut state, &["777", "f"]);
        run(&ChmodCommand, &mut state, &["600", "f"]);
        assert_eq!(state.permissions.get(id), DEFAULT_FILE_MODE);
    }

    #[test]
    fn test_same_name_in_other_directory_is_separate() {
        let mut state = new_state();
        let root = state.tree.root();
        let sub = state.tree.create_dir(root, "sub").unwrap();
        let top = state.tree.add_file(root, "f", String::new());
        let nested = state.tree.add_file(sub, "f", String::new());
        run(&ChmodCommand, &mut state, &["777", "f"]);
        assert_eq!(state.permissions.get(top), "-rwxrwxrwx");
        assert_eq!(state.permissions.get(nested), DEFAULT_FILE_MODE);
    }

    #[test]
    fn test_chmod_missing() {
        let mut state = new_state();
        let result = run(&ChmodCommand, &mut state, &["777", "f"]);
        assert_eq!(
            result.stderr,
            "chmod: cannot access 'f': No such file or directory"
        );
        assert!(state.permissions.is_empty());
    }
}
