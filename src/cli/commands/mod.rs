//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`].

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod drivers;
pub mod install;
pub mod source;
pub mod specs;
pub mod tiers;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
