//! File System Types
//!
//! Core types and the lookup trait for the virtual file system.

/// Marker that flags a listing entry as a directory.
pub const DIR_MARKER: char = '/';

/// One child of a directory listing, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirentEntry<'a> {
    /// Name as stored in the table, including the trailing `/` for directories.
    pub name: &'a str,
    pub is_directory: bool,
}

impl<'a> DirentEntry<'a> {
    pub fn parse(raw: &'a str) -> Self {
        Self {
            name: raw,
            is_directory: raw.ends_with(DIR_MARKER),
        }
    }
}

/// Read-only lookups over the directory and file tables.
///
/// Absence of a key is the only failure mode, so both lookups return
/// `Option` rather than a `Result`.
pub trait FileSystem: Send + Sync {
    /// Children of a directory, in table order.
    fn readdir(&self, path: &str) -> Option<Vec<DirentEntry<'_>>>;

    /// Literal content of a file.
    fn read_file(&self, path: &str) -> Option<&str>;

    fn is_directory(&self, path: &str) -> bool {
        self.readdir(path).is_some()
    }
}

/// Strip the last `/`-delimited segment. Root maps to itself.
pub fn parent_path(path: &str) -> String {
    if path == "/" {
        return "/".to_string();
    }
    match path.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(idx) => path[..idx].to_string(),
    }
}

/// Append a bare child name to a directory path without doubling the
/// separator at root.
pub fn child_path(dir: &str, name: &str) -> String {
    if dir == "/" {
        format!("/{}", name)
    } else {
        format!("{}/{}", dir, name)
    }
}
