//! cd - Change directory
//!
//! Supports:
//! - cd, cd ~ - back to root
//! - cd .. - up one level (root stays at root)
//! - cd <name> - into a child of the working directory
//!
//! Only paths present in the directory table are accepted.

use crate::commands::{CommandContext, CommandResult};
use crate::fs::{child_path, parent_path};

/// Handle the cd command. On success the result carries the new directory
/// and no output.
pub fn handle_cd(ctx: &CommandContext) -> CommandResult {
    let target = ctx.arg(0);
    let new_dir = resolve_target(ctx.cwd, target);

    if ctx.fs.is_directory(&new_dir) {
        CommandResult { cwd: Some(new_dir), ..CommandResult::empty() }
    } else {
        CommandResult::line(format!("cd: {}: No such directory", target.unwrap_or_default()))
    }
}

fn resolve_target(cwd: &str, target: Option<&str>) -> String {
    match target {
        None | Some("~") => "/".to_string(),
        Some("..") => parent_path(cwd),
        Some(name) => child_path(cwd, name),
    }
}
