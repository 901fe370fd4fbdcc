// src/commands/utils/lines.rs

/// Split file content on `\n` for line-oriented commands.
///
/// Trailing empty lines are dropped, so `"a\nb\n"` gives `["a", "b"]`.
/// Content without any newline is a single line, even when empty.
pub fn split_lines(content: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = content.split('\n').collect();
    if lines.len() > 1 {
        while lines.last() == Some(&"") {
            lines.pop();
        }
    }
    lines
}
