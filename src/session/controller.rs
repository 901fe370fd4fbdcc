//! One interactive shell session.
//!
//! A session owns its tree, current directory, history and side tables.
//! Nothing is shared between sessions except the read-only command
//! registry and configuration.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::commands::{create_default_registry, CommandContext, CommandRegistry, CommandResult};
use crate::config::ShellConfig;
use crate::parser::parse_command_line;

use super::state::ShellState;

pub struct Session {
    config: Arc<ShellConfig>,
    registry: Arc<CommandRegistry>,
    state: ShellState,
}

impl Session {
    /// A fresh session with every built-in verb.
    pub fn new(config: Arc<ShellConfig>) -> Self {
        Self::with_registry(config, Arc::new(create_default_registry()))
    }

    pub fn with_registry(config: Arc<ShellConfig>, registry: Arc<CommandRegistry>) -> Self {
        let state = ShellState::new(&config);
        Self {
            config,
            registry,
            state,
        }
    }

    /// Parse and run one raw line.
    ///
    /// Every non-blank line is recorded in history before it runs, so
    /// `history` lists itself. Failures come back as a failed result and
    /// never leave the tree half-changed.
    pub fn run(&mut self, line: &str) -> CommandResult {
        let Some(parsed) = parse_command_line(line) else {
            return CommandResult::empty();
        };
        self.state.history.record(line.trim_end_matches(['\r', '\n']));

        let Some(cmd) = self.registry.get(&parsed.verb) else {
            debug!(verb = %parsed.verb, "unknown command");
            return CommandResult::error(format!(
                "{}: command not found: {}",
                self.config.shell_name, parsed.verb
            ));
        };
        if parsed.args.len() < cmd.required_args() {
            return CommandResult::error(cmd.missing_operand());
        }

        trace!(verb = %parsed.verb, args = ?parsed.args, "dispatch");
        let ctx = CommandContext {
            args: parsed.args,
            state: &mut self.state,
            registry: &self.registry,
        };
        let result = cmd.execute(ctx);
        debug!(verb = %parsed.verb, exit_code = result.exit_code, "command finished");
        result
    }

    /// Run one raw line and return the text shown to the user.
    pub fn execute(&mut self, line: &str) -> String {
        self.run(line).into_text()
    }

    pub fn current_path(&self) -> String {
        self.state.current_path()
    }

    pub fn prompt(&self) -> String {
        format!("{}{}", self.current_path(), self.config.prompt_suffix)
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Arc::new(ShellConfig::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_all(session: &mut Session, lines: &[&str]) {
        for line in lines {
            session.execute(line);
        }
    }

    #[test]
    fn test_nested_mkdir_cd_pwd() {
        let mut session = Session::default();
        run_all(&mut session, &["mkdir a/b/c", "cd a/b/c"]);
        assert_eq!(session.execute("pwd"), "~/a/b/c");
        assert_eq!(session.prompt(), "~/a/b/c $ ");
    }

    #[test]
    fn test_touch_twice() {
        let mut session = Session::default();
        run_all(&mut session, &["touch f", "touch f"]);
        let root = session.state().tree.root();
        let files = &session.state().tree.dir(root).files;
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].content, "");
    }

    #[test]
    fn test_echo_redirects_then_cat() {
        let mut session = Session::default();
        session.execute("echo \"hi\" > f");
        assert_eq!(session.execute("cat f"), "hi");
        session.execute("echo \"bye\" >> f");
        assert_eq!(session.execute("cat f"), "hi\nbye");
    }

    #[test]
    fn test_echo_keeps_spacing() {
        let mut session = Session::default();
        assert_eq!(session.execute("echo a  b   c"), "a  b   c");
    }

    #[test]
    fn test_copy_directory_into_itself_leaves_tree() {
        let mut session = Session::default();
        run_all(&mut session, &["mkdir d", "touch d_file"]);
        let before = session.execute("tree");
        let result = session.run("cp d d");
        assert!(!result.is_success());
        assert_eq!(session.execute("tree"), before);
    }

    #[test]
    fn test_zip_snapshot_isolation() {
        let mut session = Session::default();
        run_all(
            &mut session,
            &["echo original > f", "zip a.zip f", "echo changed > f", "mkdir out", "cd out"],
        );
        assert_eq!(session.execute("unzip a.zip"), "unzip: 1 files extracted from a.zip");
        assert_eq!(session.execute("cat f"), "original");
    }

    #[test]
    fn test_diff_outputs() {
        let mut session = Session::default();
        run_all(&mut session, &["echo x > f", "echo y >> f", "echo x > g", "echo z >> g"]);
        assert_eq!(session.execute("diff f g"), "< y\n> z");
        session.execute("cp f h");
        assert_eq!(session.execute("diff f h"), "diff: no differences found");
    }

    #[test]
    fn test_rmdir_only_when_empty() {
        let mut session = Session::default();
        run_all(&mut session, &["mkdir d", "cd d", "touch f", "cd .."]);
        assert!(!session.run("rmdir d").is_success());
        assert_eq!(session.execute("ls"), "d/");
        run_all(&mut session, &["cd d", "rm f", "cd .."]);
        assert!(session.run("rmdir d").is_success());
        assert_eq!(session.execute("ls"), "");
    }

    #[test]
    fn test_find_reports_full_path() {
        let mut session = Session::default();
        run_all(&mut session, &["mkdir x/y/z", "cd x/y/z", "touch target", "cd ~"]);
        assert_eq!(session.execute("find ~ -name target"), "~/x/y/z/target");
    }

    #[test]
    fn test_unknown_command() {
        let mut session = Session::default();
        let result = session.run("sudo rm");
        assert_eq!(result.stderr, "zsh: command not found: sudo");
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn test_missing_operands() {
        let mut session = Session::default();
        assert_eq!(session.execute("cd"), "cd: missing operand");
        assert_eq!(session.execute("cp a"), "cp: missing operands");
        assert_eq!(session.execute("zip a.zip"), "zip: missing operand");
    }

    #[test]
    fn test_blank_line_not_recorded() {
        let mut session = Session::default();
        assert!(session.run("   ").is_success());
        assert!(session.state().history.is_empty());
    }

    #[test]
    fn test_history_includes_itself_and_failures() {
        let mut session = Session::default();
        run_all(&mut session, &["pwd", "bogus"]);
        assert_eq!(session.execute("history"), "pwd\nbogus\nhistory");
    }

    #[test]
    fn test_history_limit_from_config() {
        let config = ShellConfig {
            history_limit: Some(2),
            ..ShellConfig::default()
        };
        let mut session = Session::new(Arc::new(config));
        run_all(&mut session, &["pwd", "ls"]);
        assert_eq!(session.execute("history"), "ls\nhistory");
    }

    #[test]
    fn test_cd_up_at_root_is_noop() {
        let mut session = Session::default();
        assert!(session.run("cd ..").is_success());
        assert_eq!(session.current_path(), "~");
    }

    #[test]
    fn test_failed_cd_keeps_position() {
        let mut session = Session::default();
        run_all(&mut session, &["mkdir a", "cd a"]);
        let result = session.run("cd nowhere");
        assert_eq!(result.stderr, "cd: no such file or directory: nowhere");
        assert_eq!(session.current_path(), "~/a");
    }

    #[test]
    fn test_reset_then_fresh_root() {
        let mut session = Session::default();
        run_all(&mut session, &["mkdir a", "cd a", "touch f"]);
        session.execute("reset");
        assert_eq!(session.current_path(), "~");
        assert_eq!(session.execute("ls"), "");
        assert_eq!(session.execute("history"), "history");
    }

    #[test]
    fn test_custom_root_and_prompt() {
        let config = ShellConfig {
            root_name: "home".to_string(),
            prompt_suffix: "> ".to_string(),
            shell_name: "vsh".to_string(),
            ..ShellConfig::default()
        };
        let mut session = Session::new(Arc::new(config));
        run_all(&mut session, &["mkdir docs", "cd docs"]);
        assert_eq!(session.prompt(), "home/docs> ");
        assert_eq!(session.execute("nope"), "vsh: command not found: nope");
        session.execute("cd home");
        assert_eq!(session.current_path(), "home");
    }

    /// Same stack size tokio gives its worker threads.
    const WORKER_STACK: usize = 2 * 1024 * 1024;

    #[test]
    fn test_deep_tree_commands_on_small_stack() {
        let handle = std::thread::Builder::new()
            .stack_size(WORKER_STACK)
            .spawn(|| {
                let mut session = Session::default();
                let path = vec!["a"; 50_000].join("/");
                assert!(session.run(&format!("mkdir {}", path)).is_success());
                session.execute(&format!("cd {}", path));
                session.execute("echo x > leaf");
                session.execute("cd ~");

                assert_eq!(session.execute("du ."), "Directory size: 1 bytes");
                let found = session.execute("find ~ -name leaf");
                assert!(found.ends_with("/a/a/leaf"));

                assert!(session.run("cp a b").is_success());
                assert_eq!(session.execute("du b"), "Directory size: 1 bytes");
                assert!(session.run("rm a").is_success());
                assert!(session.run("rm b").is_success());
                assert_eq!(session.execute("ls"), "");

                // tree output grows with depth squared, so a shallower chain
                let path = vec!["t"; 5_000].join("/");
                session.execute(&format!("mkdir {}", path));
                let drawn = session.execute("tree");
                assert_eq!(drawn.lines().count(), 5_000);
            })
            .unwrap();
        handle.join().unwrap();
    }
}
