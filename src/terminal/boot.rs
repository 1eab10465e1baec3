//! Boot animation: types the boot log out one character at a time.

use std::time::Duration;

use tracing::debug;

use super::render::{RenderAdapter, RenderError, LINE_BREAK};
use crate::runtime::Clock;

pub const DEFAULT_BOOT_CHAR_DELAY: Duration = Duration::from_millis(40);

/// Replay `text` line by line, pausing `delay` after every character, then
/// leave one blank line. Runs to completion; there is no way to skip it.
pub async fn play_boot<R: RenderAdapter + ?Sized>(
    text: &str,
    delay: Duration,
    clock: &dyn Clock,
    out: &mut R,
) -> Result<(), RenderError> {
    debug!(chars = text.chars().count(), ?delay, "boot animation starting");

    let mut buf = [0u8; 4];
    for line in text.lines() {
        for c in line.chars() {
            out.write(c.encode_utf8(&mut buf))?;
            clock.sleep(delay).await;
        }
        out.write(LINE_BREAK)?;
    }
    out.write(LINE_BREAK)?;

    debug!("boot animation finished");
    Ok(())
}
