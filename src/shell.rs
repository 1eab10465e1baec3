//! Shell Environment
//!
//! Main entry point for the portfolio terminal.
//! Ties together the filesystem, interpreter, line editor and boot animation.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, trace};

use crate::fs::{FileSystem, StaticFs, BOOT_LOG_PATH};
use crate::interpreter::{Interpreter, InterpreterOptions, DEFAULT_SUDO_DELAY};
use crate::runtime::{Clock, RandomSource, RngSource, SystemClock};
use crate::terminal::{
    play_boot, KeyEvent, LineEditor, LinkPresenter, RenderAdapter, RenderError, Session,
    Submission, DEFAULT_BOOT_CHAR_DELAY,
};

/// Options for creating a Shell.
pub struct ShellOptions {
    /// Pause after each typed boot-log character
    pub boot_char_delay: Duration,
    /// How long `sudo` pretends to check the password
    pub sudo_delay: Duration,
    /// Clock instance (defaults to SystemClock)
    pub clock: Option<Arc<dyn Clock>>,
    /// Random source (defaults to an entropy-seeded StdRng)
    pub random: Option<Box<dyn RandomSource>>,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            boot_char_delay: DEFAULT_BOOT_CHAR_DELAY,
            sudo_delay: DEFAULT_SUDO_DELAY,
            clock: None,
            random: None,
        }
    }
}

/// The portfolio shell.
pub struct Shell {
    editor: LineEditor,
    clock: Arc<dyn Clock>,
    boot_char_delay: Duration,
    booted: bool,
}

impl Shell {
    /// Create a new shell. Nothing is rendered until `boot`.
    pub fn new(options: ShellOptions) -> Self {
        let clock = options.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let random = options.random.unwrap_or_else(|| Box::new(RngSource::from_entropy()));

        let interpreter = Interpreter::new(InterpreterOptions {
            fs: Arc::new(StaticFs::new()),
            clock: clock.clone(),
            random,
            sudo_delay: options.sudo_delay,
        });

        Self {
            editor: LineEditor::new(interpreter),
            clock,
            boot_char_delay: options.boot_char_delay,
            booted: false,
        }
    }

    pub fn session(&self) -> &Session {
        self.editor.session()
    }

    pub fn is_booted(&self) -> bool {
        self.booted
    }

    /// Play the boot animation and draw the first prompt. Key events are
    /// ignored until this completes.
    pub async fn boot<R: RenderAdapter + ?Sized>(&mut self, out: &mut R) -> Result<(), RenderError> {
        let boot_log = self.editor.interpreter().fs().read_file(BOOT_LOG_PATH).unwrap_or_default();
        play_boot(boot_log, self.boot_char_delay, self.clock.as_ref(), out).await?;
        self.editor.write_prompt(out)?;
        self.booted = true;
        Ok(())
    }

    /// Feed one key event to the editor.
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
        if !self.booted {
            trace!(?event, "key dropped before boot completed");
            return Ok(());
        }
        self.editor.handle_key(event, out, links).await
    }

    /// Run one line without the editor's echo or prompt. Used for one-shot
    /// execution; no boot animation is required.
    pub async fn run_line(&mut self, line: &str) -> Submission {
        debug!(line, "running line");
        self.editor.submit_line(line).await
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(ShellOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{Key, LinkList};
    use crate::testing::{BufferRenderer, FixedRandom, RecordingClock};

    fn shell(clock: Arc<RecordingClock>) -> Shell {
        Shell::new(ShellOptions {
            clock: Some(clock),
            random: Some(Box::new(FixedRandom::new(0.0))),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_boot_types_log_then_prompt() {
        let clock = Arc::new(RecordingClock::new());
        let mut sh = shell(clock.clone());
        let mut out = BufferRenderer::new();
        sh.boot(&mut out).await.unwrap();

        let fs = StaticFs::new();
        let boot_log = fs.read_file(BOOT_LOG_PATH).unwrap();
        let expected = format!("{}\r\n\r\nguest@kaustubhOS:/$ ", boot_log.replace('\n', "\r\n"));
        assert_eq!(out.output(), expected);

        let typed = boot_log.chars().filter(|c| *c != '\n').count();
        assert_eq!(clock.sleeps().len(), typed);
        assert!(clock.sleeps().iter().all(|d| *d == DEFAULT_BOOT_CHAR_DELAY));
        assert!(sh.is_booted());
    }

    #[tokio::test]
    async fn test_keys_before_boot_are_dropped() {
        let mut sh = shell(Arc::new(RecordingClock::new()));
        let (mut out, mut links) = (BufferRenderer::new(), LinkList::new());
        sh.handle_key(KeyEvent::char('l'), &mut out, &mut links).await.unwrap();
        assert_eq!(sh.session().buffer(), "");
        assert_eq!(out.output(), "");

        sh.boot(&mut out).await.unwrap();
        out.take();
        sh.handle_key(KeyEvent::char('l'), &mut out, &mut links).await.unwrap();
        assert_eq!(out.output(), "l");
    }

    #[tokio::test]
    async fn test_sudo_through_keys() {
        let clock = Arc::new(RecordingClock::new());
        let mut sh = Shell::new(ShellOptions {
            clock: Some(clock.clone()),
            random: Some(Box::new(FixedRandom::new(0.6))),
            boot_char_delay: Duration::ZERO,
            ..Default::default()
        });
        let (mut out, mut links) = (BufferRenderer::new(), LinkList::new());
        sh.boot(&mut out).await.unwrap();
        out.take();

        for c in "sudo ls".chars() {
            sh.handle_key(KeyEvent::char(c), &mut out, &mut links).await.unwrap();
        }
        sh.handle_key(KeyEvent::new(Key::Enter), &mut out, &mut links).await.unwrap();

        assert_eq!(clock.sleeps().last(), Some(&DEFAULT_SUDO_DELAY));
        assert_eq!(
            out.output(),
            "sudo ls\r\n\
             [sudo] password for guest: ********\r\n\
             Warning: sudoers file corrupted, entering recovery mode...\r\n\
             guest@kaustubhOS:/$ "
        );
    }

    #[tokio::test]
    async fn test_run_line() {
        let mut sh = shell(Arc::new(RecordingClock::new()));
        match sh.run_line("cat about.txt").await {
            Submission::Executed(result) => assert!(result.text().starts_with("Hi, I'm Kaustubh.\n")),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(sh.session().history(), &["cat about.txt".to_string()]);
    }
}
