//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Exit code for a denied product or a cart with denied lines.
pub const EXIT_DENIED: i32 = 2;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    store_path: PathBuf,
    cache_dir: Option<PathBuf>,
}

impl CommandDispatcher {
    pub fn new(store_path: PathBuf, cache_dir: Option<PathBuf>) -> Self {
        Self {
            store_path,
            cache_dir,
        }
    }

    /// Build a dispatcher from the global flags.
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(cli.store.clone(), cli.cache_dir.clone())
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Check(args) => {
                let cmd = super::check::CheckCommand::new(
                    self.store_path.clone(),
                    self.cache_dir.clone(),
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Commands::Cart(args) => {
                let cmd = super::cart::CartCommand::new(
                    self.store_path.clone(),
                    self.cache_dir.clone(),
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Commands::Inspect(args) => {
                let cmd =
                    super::inspect::InspectCommand::new(self.store_path.clone(), args.clone());
                cmd.execute(ui)
            }
            Commands::Cache(args) => {
                let cmd = super::cache::CacheCommand::new(self.cache_dir.clone(), args.clone());
                cmd.execute(ui)
            }
        }
    }
}
