// src/commands/utils/mod.rs
pub mod head_tail;
pub mod lines;
pub mod quoting;

pub use head_tail::{first_lines, last_lines, parse_line_count};
pub use lines::split_lines;
pub use quoting::strip_enclosing_quotes;
