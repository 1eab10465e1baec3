//! Link presentation: the clickable set shown next to the terminal.

use super::render::RenderError;

/// Receives link targets from the `links` command.
pub trait LinkPresenter {
    /// Replace the currently displayed set with `uris`, in order.
    fn present(&mut self, uris: &[String]) -> Result<(), RenderError>;
}

/// In-memory link set. Each `present` replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkList {
    links: Vec<String>,
}

impl LinkList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }

    /// One anchor per link, opened in a new browsing context.
    pub fn to_html(&self) -> String {
        self.links
            .iter()
            .map(|uri| {
                let escaped = escape_html(uri);
                format!(
                    "<a href=\"{0}\" target=\"_blank\" rel=\"noopener noreferrer\">{0}</a><br>",
                    escaped
                )
            })
            .collect()
    }
}

impl LinkPresenter for LinkList {
    fn present(&mut self, uris: &[String]) -> Result<(), RenderError> {
        self.links = uris.to_vec();
        Ok(())
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
