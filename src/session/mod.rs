//! Sessions
//!
//! A session is one independent virtual filesystem with its own current
//! directory, history and side tables. [`SessionManager`] keys sessions by
//! client id.

pub mod controller;
pub mod history;
pub mod manager;
pub mod state;

pub use controller::Session;
pub use history::CommandHistory;
pub use manager::{SessionManager, DEFAULT_SESSION};
pub use state::ShellState;
