use crate::commands::CommandResult;

const UNAME: &str = "KaustubhOS v3.0 portfolio-server 1.0 GNU/Linux-ish";

/// Same answer with or without `-a`.
pub fn handle_uname() -> CommandResult {
    CommandResult::line(UNAME)
}
