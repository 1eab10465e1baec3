//! Terminal Module
//!
//! Everything between raw key input and the rendered character stream:
//! session state, the line editor, the boot animation and the render
//! adapters.

pub mod boot;
pub mod editor;
pub mod keys;
pub mod links;
pub mod render;
pub mod session;
#[cfg(unix)]
pub mod stdio;

pub use boot::{play_boot, DEFAULT_BOOT_CHAR_DELAY};
pub use editor::{LineEditor, Submission};
pub use keys::{Key, KeyDecoder, KeyEvent};
pub use links::{LinkList, LinkPresenter};
pub use render::{render_line, RenderAdapter, RenderError};
pub use session::Session;
