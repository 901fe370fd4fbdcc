// src/commands/registry.rs
use indexmap::IndexMap;
use super::types::Command;

/// Verb -> handler table. Iteration follows registration order.
pub struct CommandRegistry {
    commands: IndexMap<&'static str, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: IndexMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().copied().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.values().map(|c| c.as_ref())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat::CatCommand;
use super::cd_cmd::CdCommand;
use super::chmod::ChmodCommand;
use super::chown_cmd::ChownCommand;
use super::cp::CpCommand;
use super::diff_cmd::DiffCommand;
use super::du_cmd::DuCommand;
use super::echo::EchoCommand;
use super::exit_cmd::{ExitCommand, ResetCommand};
use super::find::FindCommand;
use super::grep::GrepCommand;
use super::head::HeadCommand;
use super::help_cmd::HelpCommand;
use super::history_cmd::HistoryCommand;
use super::ls::LsCommand;
use super::mkdir::MkdirCommand;
use super::mv::{MvCommand, RenameCommand};
use super::pwd::PwdCommand;
use super::rm::RmCommand;
use super::rmdir_cmd::RmdirCommand;
use super::stat_cmd::StatCommand;
use super::tail::TailCommand;
use super::touch::TouchCommand;
use super::tree_cmd::TreeCommand;
use super::wc::WcCommand;
use super::zip_cmd::{UnzipCommand, ZipCommand};

/// Register every built-in verb, grouped the way `help` lists them.
pub fn register_builtins(registry: &mut CommandRegistry) {
    // navigation and structure
    registry.register(Box::new(PwdCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(MkdirCommand));
    registry.register(Box::new(RmdirCommand));
    registry.register(Box::new(TreeCommand));
    registry.register(Box::new(RenameCommand));
    registry.register(Box::new(MvCommand));
    registry.register(Box::new(CpCommand));
    registry.register(Box::new(RmCommand));

    // file content
    registry.register(Box::new(TouchCommand));
    registry.register(Box::new(EchoCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(HeadCommand));
    registry.register(Box::new(TailCommand));
    registry.register(Box::new(WcCommand));
    registry.register(Box::new(GrepCommand));
    registry.register(Box::new(DiffCommand));

    // metadata, search and archives
    registry.register(Box::new(ChmodCommand));
    registry.register(Box::new(ChownCommand));
    registry.register(Box::new(StatCommand));
    registry.register(Box::new(DuCommand));
    registry.register(Box::new(FindCommand));
    registry.register(Box::new(ZipCommand));
    registry.register(Box::new(UnzipCommand));

    // session
    registry.register(Box::new(HistoryCommand));
    registry.register(Box::new(HelpCommand));
    registry.register(Box::new(ResetCommand));
    registry.register(Box::new(ExitCommand));
}

/// Create a registry holding every built-in verb.
pub fn create_default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    registry
}
