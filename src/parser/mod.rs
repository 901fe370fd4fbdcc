//! Parser module for shell command lines

pub mod command_parser;

pub use command_parser::{parse_command_line, ParsedCommand};
