//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::debug;

use crate::cli::paths::resolve_store_path;
use crate::cli::Cli;
use scribe_core::config::ScribeConfig;
use scribe_core::error::{Result, ScribeError};
use scribe_core::store::Store;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    pub fn root(&self) -> &Path {
        self.root
    }

    /// Open `--store` if given, otherwise discover upwards from the root
    pub fn discover_or_open_store(&self) -> Result<Store> {
        let store = match &self.cli.store {
            Some(path) => Store::open(&resolve_store_path(self.root, path))?,
            None => Store::discover(self.root)?,
        };
        super::trace_command!(self, "discover_store");
        Ok(store)
    }

    /// Store configuration when a store is reachable; defaults plus
    /// environment overrides otherwise
    pub fn config(&self) -> Result<ScribeConfig> {
        match self.discover_or_open_store() {
            Ok(store) => Ok(store.config().clone()),
            Err(ScribeError::StoreNotFound { .. }) if self.cli.store.is_none() => {
                debug!("no store found, using default configuration");
                let mut config = ScribeConfig::default();
                config.apply_env();
                Ok(config)
            }
            Err(e) => Err(e),
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("scribe {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Rich-text notes with remote-first, extractive-fallback summaries.");
        println!();
        println!("Run `scribe --help` for usage information.");
        Ok(())
    }
}
