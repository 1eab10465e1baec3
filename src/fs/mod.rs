//! File System Module
//!
//! Read-only virtual file system for the portfolio shell. The tables are
//! compiled in; nothing is ever written at runtime.

pub mod types;
pub mod static_fs;

pub use types::*;
pub use static_fs::{StaticFs, BOOT_LOG_PATH, SYSTEM_LOGS};
