// src/commands/types.rs
use crate::commands::CommandRegistry;
use crate::session::ShellState;

/// Result of one command.
///
/// Exactly one of `stdout`/`stderr` carries text; callers that only want a
/// line of text use [`CommandResult::text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success(stdout: String) -> Self {
        Self { stdout, stderr: String::new(), exit_code: 0 }
    }

    pub fn error(stderr: String) -> Self {
        Self { stdout: String::new(), stderr, exit_code: 1 }
    }

    /// Success with no output.
    pub fn empty() -> Self {
        Self::success(String::new())
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    /// The text shown to the user: stdout on success, stderr on failure.
    pub fn text(&self) -> &str {
        if self.is_success() { &self.stdout } else { &self.stderr }
    }

    pub fn into_text(self) -> String {
        if self.is_success() { self.stdout } else { self.stderr }
    }
}

/// Everything a handler may touch while it runs.
pub struct CommandContext<'a> {
    pub args: Vec<String>,
    pub state: &'a mut ShellState,
    pub registry: &'a CommandRegistry,
}

impl CommandContext<'_> {
    /// Argument `index`, or `""` when absent.
    pub fn arg(&self, index: usize) -> &str {
        self.args.get(index).map(String::as_str).unwrap_or("")
    }
}

/// One shell verb.
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    /// One-line description for `help`.
    fn summary(&self) -> &'static str;

    /// Arguments that must be present before `execute` is called.
    fn required_args(&self) -> usize {
        0
    }

    /// Message returned when fewer than `required_args` were given.
    fn missing_operand(&self) -> String {
        if self.required_args() > 1 {
            format!("{}: missing operands", self.name())
        } else {
            format!("{}: missing operand", self.name())
        }
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult;
}
