use crate::commands::CommandResult;

const USAGE: &[&str] = &[
    "ls",
    "cd <dir>",
    "cat <file>",
    "links",
    "whoami",
    "date",
    "uname -a",
    "echo <text>",
    "clear  (frontend)",
    "help",
    "sudo <cmd>",
];

pub fn handle_help() -> CommandResult {
    let mut result = CommandResult::line("Available commands:");
    for usage in USAGE {
        result.push_plain(*usage);
    }
    result
}
