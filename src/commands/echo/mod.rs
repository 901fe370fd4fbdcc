// src/commands/echo/mod.rs
use crate::commands::utils::strip_enclosing_quotes;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::validate_name;
use crate::session::ShellState;

pub struct EchoCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Redirect {
    Append,
    Overwrite,
}

impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn summary(&self) -> &'static str {
        "print text, or write it to a file with > or >>"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let payload = ctx.args.join(" ");
        let payload = strip_enclosing_quotes(&payload);

        let Some((text, file, mode)) = split_redirect(payload) else {
            return CommandResult::success(payload.to_string());
        };
        if file.is_empty() {
            return CommandResult::error("echo: syntax error: missing file name".to_string());
        }
        write_to_file(ctx.state, file, text, mode)
    }
}

/// Split `text > file` / `text >> file`. `>>` wins when both appear.
fn split_redirect(payload: &str) -> Option<(&str, &str, Redirect)> {
    let (left, right, mode) = match payload.find(">>") {
        Some(pos) => (&payload[..pos], &payload[pos + 2..], Redirect::Append),
        None => {
            let pos = payload.find('>')?;
            (&payload[..pos], &payload[pos + 1..], Redirect::Overwrite)
        }
    };
    Some((strip_enclosing_quotes(left.trim()), right.trim(), mode))
}

fn write_to_file(state: &mut ShellState, name: &str, text: &str, mode: Redirect) -> CommandResult {
    let cwd = state.cwd;
    if state.tree.find_subdir(cwd, name).is_some() {
        return CommandResult::error(format!("echo: {}: Is a directory", name));
    }

    match state.tree.find_file_mut(cwd, name) {
        Some(file) => match mode {
            Redirect::Append => file.append_line(text),
            Redirect::Overwrite => file.write(text),
        },
        None => {
            if validate_name(name).is_err() {
                return CommandResult::error(format!("echo: {}: Invalid argument", name));
            }
            state.tree.add_file(cwd, name, text.to_string());
        }
    }
    tracing::trace!(file = %name, ?mode, "echo redirect");
    CommandResult::empty()
}
