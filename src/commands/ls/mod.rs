// src/commands/ls/mod.rs
use crate::commands::{CommandContext, CommandResult, OutputLine, Style};

/// List the working directory. Arguments are ignored.
pub fn handle_ls(ctx: &CommandContext) -> CommandResult {
    let Some(entries) = ctx.fs.readdir(ctx.cwd) else {
        return CommandResult::line(format!("ls: {}: No such file or directory", ctx.cwd));
    };

    let mut result = CommandResult::empty();
    for entry in entries {
        let style = if entry.is_directory { Style::Directory } else { Style::Plain };
        result.push(OutputLine::styled(entry.name, style));
    }
    result
}
