// src/commands/utils/quoting.rs

/// Remove one pair of double quotes wrapping the whole string.
///
/// A lone quote on only one side is left alone.
pub fn strip_enclosing_quotes(input: &str) -> &str {
    if input.len() >= 2 && input.starts_with('"') && input.ends_with('"') {
        &input[1..input.len() - 1]
    } else {
        input
    }
}
