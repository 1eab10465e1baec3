//! Static File System Implementation
//!
//! Two compiled-in tables: directory path -> newline-separated listing, and
//! file path -> literal text.

use super::types::*;

type Table = &'static [(&'static str, &'static str)];

const DIRECTORIES: Table = &[
    ("/", "boot_logs.txt\nabout.txt\ncontact.txt\nskills.txt\nprojects/"),
    ("/projects", "kaustubh-os\nredis-from-scratch\nInsightInvest"),
];

const FILES: Table = &[
    (
        "/boot_logs.txt",
        "[OK] Booting KaustubhOS \n\
         [OK] Loading neural handshake...\n\
         [OK] Mounting in-memory portfolio...\n\
         [FAIL] Humor module missing. Proceeding anyway.\n\
         [OK] System ready.\n\
         Type 'help' to begin.",
    ),
    (
        "/about.txt",
        "Hi, I'm Kaustubh.\n\
         Builder of weird systems that almost work.\n\
         I like things that glitch, hum, and blink green.",
    ),
    (
        "/contact.txt",
        "You can find me on:\n\
         Email:    snigenigmatic972@gmail.com\n\
         GitHub:   github.com/snigenigmatic\n\
         LinkedIn: linkedin.com/in/c-kaustubh",
    ),
    (
        "/skills.txt",
        "[LANGUAGES]\n  Go, JavaScript/TypeScript, Python, SQL\n\n\
         [FRAMEWORKS]\n  React, Node.js, Gin (Go)\n\n\
         [TOOLS]\n  Docker, Kubernetes, Git, AWS, xterm.js",
    ),
    (
        "/projects/kaustubh-os",
        "[KaustubhOS] - This very portfolio!\n\n\
         TYPE:     Personal Project\n\
         STACK:    Go, JavaScript, xterm.js\n\
         SOURCE:   github.com/snigenigmatic/kaustubhOS\n\n\
         'cat' a project file to see details.",
    ),
    (
        "/projects/redis-from-scratch",
        "[Redis from Scratch] - Learning project\n\n\
         TYPE:     Personal Project\n\
         STACK:    Go, Redis\n\
         SOURCE:   github.com/snigenigmatic/redis-from-scratch\n\
         NOTES:    Building a Redis clone to understand its internals.",
    ),
    (
        "/projects/InsightInvest",
        "[InsightInvest] - Smart chatbot that helps you analyze any publicly traded company \
         with just a name or ticker symbol. \n\n\
         TYPE:     Hackathon Project\n\
         STACK:    React, FastAPI, Pandas, Redis, Next.js\n\
         SOURCE:   github.com/snigenigmatic/InsightInvest",
    ),
];

/// Entries shown by the unknown-command handler. Only the first three are
/// ever printed.
pub const SYSTEM_LOGS: &[&str] = &[
    "[SYS] Initializing pseudo-random subsystems...",
    "[OK] Mounting /home/kaustubh",
    "[OK] Loading thought modules...",
    "[WARN] Memory leak detected in inspiration.dll",
    "[OK] Establishing neural handshake...",
];

/// Path of the file replayed by the boot animation.
pub const BOOT_LOG_PATH: &str = "/boot_logs.txt";

/// Read-only virtual file system backed by static tables.
#[derive(Debug, Clone, Copy)]
pub struct StaticFs {
    directories: Table,
    files: Table,
}

impl StaticFs {
    /// The portfolio filesystem.
    pub fn new() -> Self {
        Self::with_tables(DIRECTORIES, FILES)
    }

    /// Build over custom tables.
    pub fn with_tables(directories: Table, files: Table) -> Self {
        Self { directories, files }
    }

    /// All directory paths, in table order.
    pub fn directories(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.directories.iter().map(|(path, _)| *path)
    }

    fn lookup(table: Table, path: &str) -> Option<&'static str> {
        table.iter().find(|(key, _)| *key == path).map(|(_, value)| *value)
    }
}

impl Default for StaticFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for StaticFs {
    fn readdir(&self, path: &str) -> Option<Vec<DirentEntry<'_>>> {
        let listing = Self::lookup(self.directories, path)?;
        Some(listing.split('\n').map(DirentEntry::parse).collect())
    }

    fn read_file(&self, path: &str) -> Option<&str> {
        Self::lookup(self.files, path)
    }
}
