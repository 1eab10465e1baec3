// src/commands/echo/mod.rs
use crate::commands::{CommandContext, CommandResult};

/// Rejoin the arguments with single spaces. No flags, no escapes.
pub fn handle_echo(ctx: &CommandContext) -> CommandResult {
    CommandResult::line(ctx.args.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::StaticFs;

    fn run(args: Vec<&str>) -> CommandResult {
        let fs = StaticFs::new();
        let args: Vec<String> = args.into_iter().map(String::from).collect();
        let ctx = CommandContext { args: &args, cwd: "/", fs: &fs };
        handle_echo(&ctx)
    }

    #[test]
    fn test_echo_joins_args() {
        assert_eq!(run(vec!["one", "two", "three"]).text(), "one two three\n");
    }

    #[test]
    fn test_echo_no_args_is_blank_line() {
        let result = run(vec![]);
        assert_eq!(result.lines.len(), 1);
        assert_eq!(result.text(), "\n");
    }

    #[test]
    fn test_echo_flags_are_literal() {
        assert_eq!(run(vec!["-n", "hi"]).text(), "-n hi\n");
    }
}
