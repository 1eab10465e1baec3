// src/commands/cat/mod.rs
use crate::commands::{CommandContext, CommandResult};

/// Print one file. Only the first operand is read.
pub fn handle_cat(ctx: &CommandContext) -> CommandResult {
    let Some(file) = ctx.arg(0) else {
        return CommandResult::line("cat: missing file operand");
    };

    let path = resolve_file_path(ctx.cwd, file);
    match ctx.fs.read_file(&path) {
        Some(content) => content_lines(content),
        None => CommandResult::line(format!("cat: {}: No such file", file)),
    }
}

/// Absolute operands pass through; relative ones are joined onto the
/// working directory. `/projects` is joined without a doubled separator.
fn resolve_file_path(cwd: &str, file: &str) -> String {
    if file.starts_with('/') {
        file.to_string()
    } else if cwd == "/" {
        format!("/{}", file)
    } else if cwd == "/projects" {
        format!("/projects/{}", file)
    } else {
        format!("{}/{}", cwd, file)
    }
}

/// Split content into output lines. A trailing newline in the content does
/// not produce an extra empty line, and a missing one is supplied by the
/// line structure itself.
fn content_lines(content: &str) -> CommandResult {
    let body = content.strip_suffix('\n').unwrap_or(content);
    CommandResult::from_lines(body.split('\n'))
}
