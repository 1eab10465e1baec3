//! Interpreter - Command Dispatch
//!
//! Turns a command line plus the current working directory into a
//! `CommandResult`. The interpreter owns no session state: the caller
//! passes the working directory in and applies `CommandResult::cwd`.
//! Output lines are also streamed to an `OutputSink` as they are produced,
//! so a command that pauses shows what it printed before the pause.
//!
//! Delegates to the per-verb handlers in `commands/`.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::commands::cat::handle_cat;
use crate::commands::cd_cmd::handle_cd;
use crate::commands::date::handle_date;
use crate::commands::echo::handle_echo;
use crate::commands::help_cmd::handle_help;
use crate::commands::links_cmd::handle_links;
use crate::commands::ls::handle_ls;
use crate::commands::not_found::handle_unknown;
use crate::commands::sudo_cmd::handle_sudo;
use crate::commands::uname_cmd::handle_uname;
use crate::commands::whoami_cmd::handle_whoami;
use crate::commands::{
    CommandContext, CommandResult, Discard, OutputLine, OutputSink, ParsedCommand, Verb,
};
use crate::fs::{FileSystem, StaticFs};
use crate::runtime::{Clock, RandomSource, RngSource, SystemClock};

pub const DEFAULT_SUDO_DELAY: Duration = Duration::from_millis(1000);

/// Options for creating an interpreter instance.
pub struct InterpreterOptions {
    pub fs: Arc<dyn FileSystem>,
    pub clock: Arc<dyn Clock>,
    pub random: Box<dyn RandomSource>,
    /// How long `sudo` pretends to check the password.
    pub sudo_delay: Duration,
}

impl Default for InterpreterOptions {
    fn default() -> Self {
        Self {
            fs: Arc::new(StaticFs::new()),
            clock: Arc::new(SystemClock),
            random: Box::new(RngSource::from_entropy()),
            sudo_delay: DEFAULT_SUDO_DELAY,
        }
    }
}

/// Forwards to the caller's sink and counts what went through, so the lines
/// a handler already emitted are not sent twice.
struct Streamed<'a> {
    sink: &'a mut dyn OutputSink,
    emitted: usize,
}

impl OutputSink for Streamed<'_> {
    fn emit(&mut self, line: &OutputLine) {
        self.emitted += 1;
        self.sink.emit(line);
    }
}

pub struct Interpreter {
    fs: Arc<dyn FileSystem>,
    clock: Arc<dyn Clock>,
    random: Box<dyn RandomSource>,
    sudo_delay: Duration,
}

impl Interpreter {
    pub fn new(options: InterpreterOptions) -> Self {
        Self {
            fs: options.fs,
            clock: options.clock,
            random: options.random,
            sudo_delay: options.sudo_delay,
        }
    }

    pub fn fs(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    /// Execute one command line against `cwd`.
    ///
    /// Never fails: every problem is reported as output lines.
    pub async fn execute(&mut self, line: &str, cwd: &str) -> CommandResult {
        self.execute_streaming(line, cwd, &mut Discard).await
    }

    /// Like `execute`, but each output line also reaches `sink` as soon as
    /// it exists. Handlers emit a prefix of their result's lines; the rest is
    /// emitted here once the handler returns.
    pub async fn execute_streaming(
        &mut self,
        line: &str,
        cwd: &str,
        sink: &mut dyn OutputSink,
    ) -> CommandResult {
        let mut streamed = Streamed { sink, emitted: 0 };
        let ParsedCommand { verb, args } = ParsedCommand::parse(line);
        debug!(verb = verb.name(), args = args.len(), cwd, "dispatching command");

        let ctx = CommandContext { args: &args, cwd, fs: self.fs.as_ref() };
        let result = match verb {
            Verb::Help => handle_help(),
            Verb::Ls => handle_ls(&ctx),
            Verb::Cd => handle_cd(&ctx),
            Verb::Cat => handle_cat(&ctx),
            Verb::Links => handle_links(),
            Verb::Whoami => handle_whoami(),
            Verb::Date => handle_date(self.clock.now()),
            Verb::Uname => handle_uname(),
            Verb::Echo => handle_echo(&ctx),
            Verb::Sudo => {
                handle_sudo(self.clock.as_ref(), &mut *self.random, self.sudo_delay, &mut streamed)
                    .await
            }
            Verb::Unknown(ref name) => handle_unknown(name, &mut *self.random),
        };

        for rest in result.lines.get(streamed.emitted..).unwrap_or_default() {
            streamed.sink.emit(rest);
        }

        if let Some(ref new_cwd) = result.cwd {
            debug!(from = cwd, to = new_cwd.as_str(), "working directory changed");
        }
        result
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(InterpreterOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Style;
    use crate::testing::{FixedRandom, RecordingClock};
    use chrono::{TimeZone, Utc};

    fn interpreter(draw: f64) -> (Interpreter, Arc<RecordingClock>) {
        let clock = Arc::new(RecordingClock::new());
        let interp = Interpreter::new(InterpreterOptions {
            clock: clock.clone(),
            random: Box::new(FixedRandom::new(draw)),
            ..Default::default()
        });
        (interp, clock)
    }

    #[tokio::test]
    async fn test_execute_ls() {
        let (mut interp, _) = interpreter(0.0);
        let result = interp.execute("ls", "/").await;
        assert_eq!(result.lines.len(), 5);
        assert_eq!(result.lines[4].style, Style::Directory);
    }

    #[tokio::test]
    async fn test_execute_cd_reports_new_cwd() {
        let (mut interp, _) = interpreter(0.0);
        let result = interp.execute("cd projects", "/").await;
        assert_eq!(result.cwd.as_deref(), Some("/projects"));
        let result = interp.execute("cd ..", "/projects").await;
        assert_eq!(result.cwd.as_deref(), Some("/"));
    }

    #[tokio::test]
    async fn test_execute_cd_rejected_keeps_cwd() {
        let (mut interp, _) = interpreter(0.0);
        let result = interp.execute("cd doesnotexist", "/").await;
        assert!(result.cwd.is_none());
        assert_eq!(result.text(), "cd: doesnotexist: No such directory\n");
    }

    #[tokio::test]
    async fn test_execute_echo() {
        let (mut interp, _) = interpreter(0.0);
        assert_eq!(interp.execute("echo one two three", "/").await.text(), "one two three\n");
    }

    #[tokio::test]
    async fn test_execute_uname_ignores_flags() {
        let (mut interp, _) = interpreter(0.0);
        let bare = interp.execute("uname", "/").await;
        let flagged = interp.execute("uname -a --whatever", "/").await;
        assert_eq!(bare, flagged);
    }

    #[tokio::test]
    async fn test_execute_date_uses_clock() {
        let clock = Arc::new(RecordingClock::at(Utc.with_ymd_and_hms(2026, 10, 15, 8, 0, 0).unwrap()));
        let mut interp = Interpreter::new(InterpreterOptions {
            clock,
            random: Box::new(FixedRandom::new(0.0)),
            ..Default::default()
        });
        assert_eq!(interp.execute("date", "/").await.text(), "Thu, 15 Oct 2026 08:00:00 GMT\n");
    }

    #[tokio::test]
    async fn test_execute_sudo_sleeps_configured_delay() {
        let clock = Arc::new(RecordingClock::new());
        let mut interp = Interpreter::new(InterpreterOptions {
            clock: clock.clone(),
            random: Box::new(FixedRandom::new(0.99)),
            sudo_delay: Duration::from_millis(250),
            ..Default::default()
        });
        let result = interp.execute("sudo rm -rf /", "/").await;
        assert_eq!(clock.sleeps(), vec![Duration::from_millis(250)]);
        assert_eq!(
            result.lines.last().unwrap().text,
            "Permission denied. This incident will be reported. (Not really)"
        );
    }

    #[tokio::test]
    async fn test_streaming_emits_every_line_once() {
        let (mut interp, _) = interpreter(0.0);
        let mut seen: Vec<OutputLine> = Vec::new();
        let result = interp.execute_streaming("sudo make me a sandwich", "/", &mut seen).await;
        assert_eq!(seen, result.lines);
        assert_eq!(seen.len(), 3);

        let mut seen: Vec<OutputLine> = Vec::new();
        let result = interp.execute_streaming("ls", "/", &mut seen).await;
        assert_eq!(seen, result.lines);
    }

    #[tokio::test]
    async fn test_execute_unknown_verb() {
        let (mut interp, clock) = interpreter(0.1);
        let result = interp.execute("vim", "/").await;
        assert_eq!(result.text(), "bash: vim: command not found\n");
        assert!(clock.sleeps().is_empty());
    }

    #[tokio::test]
    async fn test_execute_clear_is_not_a_verb() {
        let (mut interp, _) = interpreter(0.1);
        let result = interp.execute("clear", "/").await;
        assert_eq!(result.text(), "bash: clear: command not found\n");
    }

    #[tokio::test]
    async fn test_execute_links_payload() {
        let (mut interp, _) = interpreter(0.0);
        let result = interp.execute("links", "/").await;
        assert_eq!(result.lines.len(), 4);
        assert_eq!(result.links.map(|l| l.len()), Some(3));
    }
}
