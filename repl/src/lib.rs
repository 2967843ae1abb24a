//! Evman REPL library - line-oriented command loop over the event ledger.
//!
//! It is split into modules for better maintainability:
//!
//! - `cli`: Command-line arguments of the `evman` binary
//! - `command`: Parsing of a command line into a [`Command`]
//! - `repl`: The read-eval loop and the interactive insert flow
//! - `format`: Output formatting utilities

mod cli;
mod command;
mod format;
mod repl;

pub use cli::{Cli, USAGE};
pub use command::{parse_command, Command, CommandError};
pub use format::{format_categories, format_event, usage_text};
pub use repl::{Flow, Repl};
