//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and hands them the global
//! `--store` and `--cache-dir` flags.

pub mod cache;
pub mod cart;
pub mod check;
pub mod context;
pub mod dispatcher;
pub mod display;
pub mod inspect;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, EXIT_DENIED};
