//! External program execution and platform helpers.

pub mod command;
pub mod platform;

pub use command::{
    display_command, execute, execute_check, execute_output, execute_stdout, CommandOptions,
    CommandResult,
};
pub use platform::{is_ci, open_url, url_opener};
