// src/commands/mod.rs
pub mod cat;
pub mod cd_cmd;
pub mod chmod;
pub mod chown_cmd;
pub mod cp;
pub mod diff_cmd;
pub mod du_cmd;
pub mod echo;
pub mod exit_cmd;
pub mod find;
pub mod grep;
pub mod head;
pub mod help_cmd;
pub mod history_cmd;
pub mod ls;
pub mod mkdir;
pub mod mv;
pub mod pwd;
pub mod registry;
pub mod rm;
pub mod rmdir_cmd;
pub mod stat_cmd;
pub mod tail;
pub mod touch;
pub mod tree_cmd;
pub mod types;
pub mod utils;
pub mod wc;
pub mod zip_cmd;

pub use registry::{create_default_registry, register_builtins, CommandRegistry};
pub use types::{Command, CommandContext, CommandResult};
