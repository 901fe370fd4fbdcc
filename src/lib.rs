//! vshell - a sandboxed, in-memory shell
//!
//! Each [`Session`] owns a virtual directory tree and answers shell-style
//! command lines (`mkdir`, `cd`, `echo > file`, `find`, `zip`, ...) with plain
//! text. Nothing touches the host filesystem. [`SessionManager`] keeps one
//! isolated session per client id.

pub mod commands;
pub mod config;
pub mod fs;
pub mod parser;
pub mod session;

pub use commands::{CommandRegistry, CommandResult};
pub use config::{ConfigError, ShellConfig};
pub use session::{Session, SessionManager};
