// src/commands/mod.rs
pub mod cat;
pub mod cd_cmd;
pub mod date;
pub mod echo;
pub mod help_cmd;
pub mod links_cmd;
pub mod ls;
pub mod not_found;
pub mod sudo_cmd;
pub mod types;
pub mod uname_cmd;
pub mod whoami_cmd;

pub use types::{
    CommandContext, CommandResult, Discard, OutputLine, OutputSink, ParsedCommand, Style, Verb,
};
