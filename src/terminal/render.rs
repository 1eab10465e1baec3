//! Render adapter contract and the ANSI treatment of style hints.

use std::borrow::Cow;
use std::io;

use thiserror::Error;

use crate::commands::{OutputLine, Style};

pub const LINE_BREAK: &str = "\r\n";
/// Erase the whole current line and return the cursor to column 0.
pub const CLEAR_LINE: &str = "\x1b[2K\r";

const RESET: &str = "\x1b[0m";

/// Render errors
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("terminal write failed: {0}")]
    Io(#[from] io::Error),

    #[error("terminal mode change failed, {operation}: {source}")]
    Mode {
        operation: String,
        #[source]
        source: io::Error,
    },
}

/// Sink for the character stream the shell produces.
pub trait RenderAdapter {
    /// Append raw text. May contain escape sequences.
    fn write(&mut self, text: &str) -> Result<(), RenderError>;

    fn write_line(&mut self, text: &str) -> Result<(), RenderError> {
        self.write(text)?;
        self.write(LINE_BREAK)
    }

    /// Best-effort clear of the visible scrollback. Adapters that cannot
    /// clear keep the default no-op.
    fn clear_scrollback(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}

fn color_code(style: Style) -> Option<&'static str> {
    match style {
        Style::Plain => None,
        Style::Directory => Some("\x1b[34m"),
        Style::Success => Some("\x1b[32m"),
        Style::Warning => Some("\x1b[33m"),
        Style::Muted => Some("\x1b[90m"),
    }
}

/// Text of an output line with its style hint applied as an SGR colour.
pub fn render_line(line: &OutputLine) -> Cow<'_, str> {
    match color_code(line.style) {
        Some(code) => Cow::Owned(format!("{}{}{}", code, line.text, RESET)),
        None => Cow::Borrowed(&line.text),
    }
}
