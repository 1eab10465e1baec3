//! kaustubh-os - A simulated portfolio terminal
//!
//! This library provides a small scripted shell over a static, compiled-in
//! filesystem: a command interpreter, a line editor with history, a typed
//! boot animation and the render adapters that put it on a terminal.

pub mod commands;
pub mod fs;
pub mod interpreter;
pub mod runtime;
pub mod shell;
pub mod terminal;

#[cfg(test)]
pub(crate) mod testing;

pub use commands::{CommandResult, OutputLine, OutputSink, Style, Verb};
pub use fs::StaticFs;
pub use interpreter::Interpreter;
pub use shell::{Shell, ShellOptions};
pub use terminal::{Key, KeyEvent, LinkPresenter, RenderAdapter, RenderError, Session};
