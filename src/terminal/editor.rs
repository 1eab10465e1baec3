//! Line editor
//!
//! Applies key events to the session and renders the result. On Enter the
//! submitted line goes to the interpreter, except `clear`, which is handled
//! here.

use tracing::{debug, trace};

use super::keys::{Key, KeyEvent};
use super::links::LinkPresenter;
use super::render::{render_line, RenderAdapter, RenderError, CLEAR_LINE, LINE_BREAK};
use super::session::Session;
use crate::commands::{CommandResult, Discard, OutputLine, OutputSink};
use crate::interpreter::Interpreter;

const CLEAR_COMMAND: &str = "clear";

/// What a submitted line turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Blank line; nothing ran.
    Empty,
    /// `clear`; the caller clears the scrollback.
    Clear,
    Executed(CommandResult),
}

/// Renders lines the moment the interpreter emits them. The first render
/// error is kept and later lines are dropped.
struct RenderSink<'a, R: RenderAdapter + ?Sized> {
    out: &'a mut R,
    error: Option<RenderError>,
}

impl<R: RenderAdapter + ?Sized> OutputSink for RenderSink<'_, R> {
    fn emit(&mut self, line: &OutputLine) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.out.write_line(&render_line(line)) {
            self.error = Some(e);
        }
    }
}

pub struct LineEditor {
    session: Session,
    interpreter: Interpreter,
}

impl LineEditor {
    pub fn new(interpreter: Interpreter) -> Self {
        Self { session: Session::new(), interpreter }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn write_prompt<R: RenderAdapter + ?Sized>(&self, out: &mut R) -> Result<(), RenderError> {
        out.write(&self.session.prompt())
    }

    /// Clear the current line and re-emit prompt plus buffer.
    fn redraw<R: RenderAdapter + ?Sized>(&self, out: &mut R) -> Result<(), RenderError> {
        out.write(CLEAR_LINE)?;
        self.write_prompt(out)?;
        out.write(self.session.buffer())
    }

    pub async fn handle_key<R, L>(
        &mut self,
        event: KeyEvent,
        out: &mut R,
        links: &mut L,
    ) -> Result<(), RenderError>
    where
        R: RenderAdapter + ?Sized,
        L: LinkPresenter + ?Sized,
    {
        trace!(?event, "key");

        match event.key {
            Key::Enter => self.handle_enter(out, links).await,
            Key::Backspace => {
                if self.session.backspace() {
                    self.redraw(out)?;
                }
                Ok(())
            }
            Key::ArrowUp => {
                if self.session.history_up() {
                    self.redraw(out)?;
                }
                Ok(())
            }
            Key::ArrowDown => {
                if self.session.history_down() {
                    self.redraw(out)?;
                }
                Ok(())
            }
            _ if event.is_interrupt() => {
                out.write("^C")?;
                out.write(LINE_BREAK)?;
                self.session.cancel();
                self.write_prompt(out)
            }
            // The front end decides whether Ctrl+D ends the session; it never types.
            _ if event.is_end_of_input() => Ok(()),
            Key::Char(c) => {
                if self.session.push_char(c) {
                    let mut echo = [0u8; 4];
                    out.write(c.encode_utf8(&mut echo))?;
                }
                Ok(())
            }
            Key::Tab | Key::Escape | Key::ArrowLeft | Key::ArrowRight => Ok(()),
        }
    }

    async fn handle_enter<R, L>(&mut self, out: &mut R, links: &mut L) -> Result<(), RenderError>
    where
        R: RenderAdapter + ?Sized,
        L: LinkPresenter + ?Sized,
    {
        let command = self.session.submit();
        out.write(LINE_BREAK)?;

        let mut sink = RenderSink { out: &mut *out, error: None };
        let submission = self.dispatch(&command, &mut sink).await;
        if let Some(e) = sink.error {
            return Err(e);
        }

        match submission {
            Submission::Empty => {}
            Submission::Clear => out.clear_scrollback()?,
            Submission::Executed(result) => {
                if let Some(ref uris) = result.links {
                    links.present(uris)?;
                }
            }
        }
        self.write_prompt(out)
    }

    /// Submit `line` as if typed and followed by Enter, without rendering.
    /// History and working directory are updated exactly as for a key-driven
    /// submit.
    pub async fn submit_line(&mut self, line: &str) -> Submission {
        self.session.set_buffer(line);
        let command = self.session.submit();
        self.dispatch(&command, &mut Discard).await
    }

    async fn dispatch(&mut self, command: &str, sink: &mut dyn OutputSink) -> Submission {
        if command.is_empty() {
            return Submission::Empty;
        }
        if command == CLEAR_COMMAND {
            debug!("clearing scrollback");
            return Submission::Clear;
        }

        let result = self.interpreter.execute_streaming(command, self.session.cwd(), sink).await;
        if let Some(ref cwd) = result.cwd {
            self.session.set_cwd(cwd.clone());
        }
        Submission::Executed(result)
    }
}
