// src/commands/utils/head_tail.rs
use crate::commands::CommandResult;
use super::lines::split_lines;

/// Parse the line-count operand of `head`/`tail`.
pub fn parse_line_count(cmd_name: &str, raw: &str) -> Result<usize, CommandResult> {
    raw.trim().parse::<usize>().map_err(|_| {
        CommandResult::error(format!("{}: invalid number of lines: '{}'", cmd_name, raw))
    })
}

/// First `n` lines of `content`, newline-joined.
pub fn first_lines(content: &str, n: usize) -> String {
    let lines = split_lines(content);
    let end = n.min(lines.len());
    lines[..end].join("\n")
}

/// Last `n` lines of `content`, newline-joined.
pub fn last_lines(content: &str, n: usize) -> String {
    let lines = split_lines(content);
    let start = lines.len().saturating_sub(n);
    lines[start..].join("\n")
}
