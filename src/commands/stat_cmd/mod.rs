// src/commands/stat_cmd/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct StatCommand;

impl Command for StatCommand {
    fn name(&self) -> &'static str {
        "stat"
    }

    fn summary(&self) -> &'static str {
        "show a file's size or a directory's subdirectory count"
    }

    fn required_args(&self) -> usize {
        1
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let name = ctx.arg(0);
        let tree = &ctx.state.tree;
        let cwd = ctx.state.cwd;

        if let Some(file) = tree.find_file(cwd, name) {
            return CommandResult::success(format!("File: {}\nSize: {} bytes", name, file.size()));
        }
        if let Some(dir) = tree.find_subdir(cwd, name) {
            return CommandResult::success(format!(
                "Directory: {}\nSubdirectories: {}",
                name,
                tree.dir(dir).subdirectories.len()
            ));
        }
        CommandResult::error(format!(
            "stat: cannot stat '{}': No such file or directory",
            name
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{new_state, run};

    #[test]
    fn test_stat_file() {
        let mut state = new_state();
        let root = state.tree.root();
        state.tree.add_file(root, "f", "hello".to_string());
        let result = run(&StatCommand, &mut state, &["f"]);
        assert_eq!(result.stdout, "File: f\nSize: 5 bytes");
    }

    #[test]
    fn test_stat_directory_counts_immediate_subdirs() {
        let mut state = new_state();
        let root = state.tree.root();
        let d = state.tree.create_dir(root, "d").unwrap();
        state.tree.create_dir(d, "a").unwrap();
        let b = state.tree.create_dir(d, "b").unwrap();
        state.tree.create_dir(b, "nested").unwrap();
        state.tree.add_file(d, "f", String::new());
        let result = run(&StatCommand, &mut state, &["d"]);
        assert_eq!(result.stdout, "Directory: d\nSubdirectories: 2");
    }

    #[test]
    fn test_stat_missing() {
        let mut state = new_state();
        let result = run(&StatCommand, &mut state, &["x"]);
        assert_eq!(result.stderr, "stat: cannot stat 'x': No such file or directory");
    }
}
