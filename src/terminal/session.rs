//! Per-run session state: working directory, input buffer and history.

/// Mutable state of one terminal session. Created when the shell is
/// mounted, dropped with it; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    cwd: String,
    buffer: String,
    history: Vec<String>,
    /// In `0..=history.len()`; `history.len()` means a fresh line.
    history_cursor: usize,
}

impl Session {
    pub const USER: &'static str = "guest";
    pub const HOST: &'static str = "kaustubhOS";

    pub fn new() -> Self {
        Self {
            cwd: "/".to_string(),
            buffer: String::new(),
            history: Vec::new(),
            history_cursor: 0,
        }
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Callers only pass directories the filesystem table knows about.
    pub fn set_cwd(&mut self, cwd: String) {
        self.cwd = cwd;
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn history_cursor(&self) -> usize {
        self.history_cursor
    }

    pub fn prompt(&self) -> String {
        format!("{}@{}:{}$ ", Self::USER, Self::HOST, self.cwd)
    }

    /// Append a character. Line terminators and other control characters
    /// are refused.
    pub fn push_char(&mut self, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        self.buffer.push(c);
        true
    }

    /// Replace the buffer wholesale, dropping control characters.
    pub fn set_buffer(&mut self, text: &str) {
        self.buffer = text.chars().filter(|c| !c.is_control()).collect();
    }

    pub fn backspace(&mut self) -> bool {
        self.buffer.pop().is_some()
    }

    /// Step toward the oldest entry. No-op with an empty history.
    pub fn history_up(&mut self) -> bool {
        if self.history.is_empty() {
            return false;
        }
        self.history_cursor = self.history_cursor.saturating_sub(1);
        self.buffer = self.history.get(self.history_cursor).cloned().unwrap_or_default();
        true
    }

    /// Step toward the fresh line. No-op when already there.
    pub fn history_down(&mut self) -> bool {
        if self.history_cursor >= self.history.len() {
            return false;
        }
        self.history_cursor += 1;
        self.buffer = self.history.get(self.history_cursor).cloned().unwrap_or_default();
        true
    }

    /// Abandon the current line.
    pub fn cancel(&mut self) {
        self.buffer.clear();
        self.history_cursor = self.history.len();
    }

    /// Take the trimmed buffer as a command. Non-empty commands are
    /// recorded in history verbatim.
    pub fn submit(&mut self) -> String {
        let command = self.buffer.trim().to_string();
        if !command.is_empty() {
            self.history.push(command.clone());
        }
        self.history_cursor = self.history.len();
        self.buffer.clear();
        command
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
