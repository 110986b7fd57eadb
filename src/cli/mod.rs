//! Command-line interface for Cartgate.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CartArgs, CheckArgs, Cli, Commands, InspectArgs, ShopperArgs};
pub use commands::{Command, CommandDispatcher, CommandResult, EXIT_DENIED};
