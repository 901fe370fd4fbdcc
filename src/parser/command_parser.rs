//! Command Parser
//!
//! Splits one raw line into a verb and at most two arguments. The second
//! argument keeps the rest of the line verbatim, embedded spaces included.

/// Verb whose payload is taken whole, redirection operators and all.
const ECHO_PREFIX: &str = "echo ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub verb: String,
    pub args: Vec<String>,
}

impl ParsedCommand {
    fn new(verb: &str, args: Vec<String>) -> Self {
        Self {
            verb: verb.to_string(),
            args,
        }
    }
}

/// Parse a raw command line. Blank lines yield `None`.
pub fn parse_command_line(line: &str) -> Option<ParsedCommand> {
    let line = line.trim_end_matches(['\r', '\n']);

    if let Some(payload) = line.strip_prefix(ECHO_PREFIX) {
        return Some(ParsedCommand::new("echo", vec![payload.to_string()]));
    }

    let (verb, rest) = next_token(line.trim_start())?;
    let mut args = Vec::with_capacity(2);
    if let Some((arg1, rest)) = next_token(rest) {
        args.push(arg1.to_string());
        let arg2 = rest.trim();
        if !arg2.is_empty() {
            args.push(arg2.to_string());
        }
    }
    Some(ParsedCommand::new(verb, args))
}

/// Split off the leading whitespace-delimited token.
fn next_token(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    match input.find(char::is_whitespace) {
        Some(end) => Some((&input[..end], &input[end..])),
        None => Some((input, "")),
    }
}
