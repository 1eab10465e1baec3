// src/commands/types.rs
use serde::Serialize;

use crate::fs::FileSystem;

/// Abstract visual treatment for an output line. The render adapter decides
/// what each hint looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Plain,
    Directory,
    Success,
    Warning,
    Muted,
}

impl Style {
    /// Style for a system-log entry, chosen by its bracket prefix.
    pub fn for_log(entry: &str) -> Self {
        if entry.starts_with("[OK]") {
            Style::Success
        } else if entry.starts_with("[WARN]") {
            Style::Warning
        } else {
            Style::Muted
        }
    }
}

/// A single line of command output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputLine {
    pub text: String,
    pub style: Style,
}

impl OutputLine {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: Style::Plain }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self { text: text.into(), style }
    }
}

/// Receives output lines while a command is still running.
pub trait OutputSink {
    fn emit(&mut self, line: &OutputLine);
}

/// Sink for callers that only want the finished `CommandResult`.
pub struct Discard;

impl OutputSink for Discard {
    fn emit(&mut self, _line: &OutputLine) {}
}

impl OutputSink for Vec<OutputLine> {
    fn emit(&mut self, line: &OutputLine) {
        self.push(line.clone());
    }
}

/// 命令执行结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    pub lines: Vec<OutputLine>,
    /// New working directory, when the command changed it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
    /// Link targets for the link presenter. Replaces any previous set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,
}

impl CommandResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn line(text: impl Into<String>) -> Self {
        Self { lines: vec![OutputLine::plain(text)], ..Self::default() }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(OutputLine::plain).collect(),
            ..Self::default()
        }
    }

    pub fn push(&mut self, line: OutputLine) {
        self.lines.push(line);
    }

    pub fn push_plain(&mut self, text: impl Into<String>) {
        self.lines.push(OutputLine::plain(text));
    }

    /// Output text with every line terminated by `\n`, styles dropped.
    pub fn text(&self) -> String {
        self.lines.iter().map(|l| format!("{}\n", l.text)).collect()
    }
}

/// 命令执行上下文
pub struct CommandContext<'a> {
    pub args: &'a [String],
    pub cwd: &'a str,
    pub fs: &'a dyn FileSystem,
}

impl<'a> CommandContext<'a> {
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).map(String::as_str)
    }
}

/// The closed set of verbs the interpreter understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    Help,
    Ls,
    Cd,
    Cat,
    Links,
    Whoami,
    Date,
    Uname,
    Echo,
    Sudo,
    Unknown(String),
}

impl Verb {
    /// Case-sensitive lookup. Anything unrecognised becomes `Unknown`.
    pub fn parse(word: &str) -> Self {
        match word {
            "help" => Verb::Help,
            "ls" => Verb::Ls,
            "cd" => Verb::Cd,
            "cat" => Verb::Cat,
            "links" => Verb::Links,
            "whoami" => Verb::Whoami,
            "date" => Verb::Date,
            "uname" => Verb::Uname,
            "echo" => Verb::Echo,
            "sudo" => Verb::Sudo,
            other => Verb::Unknown(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Verb::Help => "help",
            Verb::Ls => "ls",
            Verb::Cd => "cd",
            Verb::Cat => "cat",
            Verb::Links => "links",
            Verb::Whoami => "whoami",
            Verb::Date => "date",
            Verb::Uname => "uname",
            Verb::Echo => "echo",
            Verb::Sudo => "sudo",
            Verb::Unknown(name) => name.as_str(),
        }
    }
}

/// A command line split into verb and positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub verb: Verb,
    pub args: Vec<String>,
}

impl ParsedCommand {
    /// Trim, then split on single spaces. No quoting or escaping; doubled
    /// spaces yield empty arguments.
    pub fn parse(line: &str) -> Self {
        let mut parts = line.trim().split(' ');
        let verb = Verb::parse(parts.next().unwrap_or_default());
        let args = parts.map(str::to_string).collect();
        Self { verb, args }
    }
}
