//! Interpreter module
//!
//! Parses a submitted line and dispatches it over the closed verb set.

pub mod interpreter;

pub use interpreter::{Interpreter, InterpreterOptions, DEFAULT_SUDO_DELAY};
