//! Stdio render adapter for a real terminal.
//!
//! Puts the controlling terminal in raw mode so single key presses reach the
//! editor, and restores the saved mode on drop.

use std::io::{self, Read, Write};

use tracing::warn;

use super::keys::{KeyDecoder, KeyEvent};
use super::links::{LinkList, LinkPresenter};
use super::render::{RenderAdapter, RenderError, LINE_BREAK};

const STDIN_FD: libc::c_int = libc::STDIN_FILENO;

/// Cursor home, clear screen, clear scrollback.
const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J\x1b[3J";

/// Raw mode guard for stdin.
pub struct RawMode {
    saved: libc::termios,
}

impl RawMode {
    pub fn enable() -> Result<Self, RenderError> {
        // SAFETY: termios is plain data; tcgetattr fills it in.
        let mut termios: libc::termios = unsafe { std::mem::zeroed() };
        if unsafe { libc::tcgetattr(STDIN_FD, &mut termios) } != 0 {
            return Err(mode_error("tcgetattr"));
        }
        let saved = termios;

        unsafe { libc::cfmakeraw(&mut termios) };
        if unsafe { libc::tcsetattr(STDIN_FD, libc::TCSANOW, &termios) } != 0 {
            return Err(mode_error("tcsetattr"));
        }
        Ok(Self { saved })
    }

    /// Throw away input typed but not yet read.
    pub fn discard_pending_input(&self) {
        if unsafe { libc::tcflush(STDIN_FD, libc::TCIFLUSH) } != 0 {
            warn!(error = %io::Error::last_os_error(), "could not flush pending input");
        }
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if unsafe { libc::tcsetattr(STDIN_FD, libc::TCSANOW, &self.saved) } != 0 {
            warn!(error = %io::Error::last_os_error(), "could not restore terminal mode");
        }
    }
}

fn mode_error(operation: &str) -> RenderError {
    RenderError::Mode {
        operation: operation.to_string(),
        source: io::Error::last_os_error(),
    }
}

/// Writes straight to stdout, flushing after every write so typed characters
/// appear immediately.
pub struct StdoutRenderer {
    out: io::Stdout,
}

impl StdoutRenderer {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for StdoutRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderAdapter for StdoutRenderer {
    fn write(&mut self, text: &str) -> Result<(), RenderError> {
        let mut lock = self.out.lock();
        lock.write_all(text.as_bytes())?;
        lock.flush()?;
        Ok(())
    }

    fn clear_scrollback(&mut self) -> Result<(), RenderError> {
        self.write(CLEAR_SCREEN)
    }
}

/// Prints each presented link as an OSC 8 hyperlink on its own line.
#[derive(Default)]
pub struct StdoutLinks {
    current: LinkList,
}

impl StdoutLinks {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LinkPresenter for StdoutLinks {
    fn present(&mut self, uris: &[String]) -> Result<(), RenderError> {
        self.current.present(uris)?;
        let mut out = io::stdout().lock();
        for uri in self.current.links() {
            write!(out, "{}{}", hyperlink(uri), LINE_BREAK)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// OSC 8 hyperlink whose visible text is the target itself.
pub fn hyperlink(uri: &str) -> String {
    format!("\x1b]8;;{0}\x1b\\{0}\x1b]8;;\x1b\\", uri)
}

/// Blocking key reader over stdin.
pub struct StdinKeys {
    stdin: io::Stdin,
    decoder: KeyDecoder,
}

impl StdinKeys {
    pub fn new() -> Self {
        Self { stdin: io::stdin(), decoder: KeyDecoder::new() }
    }

    /// Next batch of key events. `Ok(None)` at end of input.
    pub fn read(&mut self) -> io::Result<Option<Vec<KeyEvent>>> {
        let mut buf = [0u8; 64];
        loop {
            let n = self.stdin.lock().read(&mut buf)?;
            if n == 0 {
                return Ok(None);
            }
            let events = self.decoder.feed(&buf[..n]);
            if !events.is_empty() {
                return Ok(Some(events));
            }
        }
    }

    /// Forget partially decoded input.
    pub fn reset(&mut self) {
        self.decoder.reset();
    }
}

impl Default for StdinKeys {
    fn default() -> Self {
        Self::new()
    }
}
