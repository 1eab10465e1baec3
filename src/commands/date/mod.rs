// src/commands/date/mod.rs
use chrono::{DateTime, Utc};

use crate::commands::CommandResult;

/// HTTP-date style UTC timestamp, e.g. `Thu, 15 Oct 2026 08:00:00 GMT`.
const UTC_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Print the given instant. Arguments are ignored.
pub fn handle_date(now: DateTime<Utc>) -> CommandResult {
    CommandResult::line(format_utc(&now))
}

pub fn format_utc(dt: &DateTime<Utc>) -> String {
    dt.format(UTC_FORMAT).to_string()
}
