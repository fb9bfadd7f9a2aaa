//! Command-line interface for rigcheck.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    CheckArgs, Cli, Commands, CompletionsArgs, DriversArgs, InstallArgs, SpecsArgs, TiersArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
