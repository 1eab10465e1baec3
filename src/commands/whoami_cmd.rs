use crate::commands::CommandResult;

/// The only user this system has.
pub const USER: &str = "guest";

pub fn handle_whoami() -> CommandResult {
    CommandResult::line(USER)
}
