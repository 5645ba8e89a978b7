//! Recursive rendering of a directory into tree-diagram lines

use std::path::{Path, PathBuf};

use glob::Pattern;
use log::{debug, error};

use crate::console::{ConsoleOutput, MessageKind, notify};
use crate::error::StructureError;

use super::config::BuilderConfig;
use super::entry::{Entry, Lister, compile_patterns, list_entries};
use super::sort::order_entries;

/// Connector for every sibling except the last.
pub const BRANCH: &str = "├── ";
/// Connector for the last sibling.
pub const LAST_BRANCH: &str = "└── ";
/// Continuation below a sibling that has later siblings.
pub const VERTICAL: &str = "│   ";
/// Continuation below the last sibling.
pub const BLANK: &str = "    ";

/// Separator appended to directory names.
pub const DIR_SUFFIX: char = '/';

/// Connector glyph for a sibling.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Calculate the prefix for the children of a sibling.
pub fn continuation_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", prefix, BLANK)
    } else {
        format!("{}{}", prefix, VERTICAL)
    }
}

/// Result of rendering a directory's contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendering {
    /// All lines below the root line, each newline-terminated
    pub text: String,
    pub directories: usize,
    pub files: usize,
    /// Directories whose contents could not be listed
    pub skipped: Vec<PathBuf>,
}

/// Depth-first renderer that accumulates lines into one buffer.
pub struct Renderer<'a, C: ConsoleOutput + ?Sized> {
    patterns: Vec<Pattern>,
    exclude: Option<&'a Path>,
    list: Lister,
    console: &'a mut C,
    rendering: Rendering,
}

impl<'a, C: ConsoleOutput + ?Sized> Renderer<'a, C> {
    pub fn new(config: &BuilderConfig, console: &'a mut C) -> Self {
        Self {
            patterns: compile_patterns(&config.ignore_patterns),
            exclude: None,
            list: list_entries,
            console,
            rendering: Rendering::default(),
        }
    }

    /// Leave `path` out of the rendering (used for the output file).
    pub fn excluding(mut self, path: &'a Path) -> Self {
        self.exclude = Some(path);
        self
    }

    /// List directories with `list` instead of reading the file system.
    pub fn with_lister(mut self, list: Lister) -> Self {
        self.list = list;
        self
    }

    /// Render the contents of `root`.
    ///
    /// Failing to list `root` itself is an error. Failing to list anything
    /// below it skips only that directory's contents.
    pub fn render(mut self, root: &Path) -> Result<Rendering, StructureError> {
        debug!("Building structure for the path: {}", root.display());
        let entries = (self.list)(root, &self.patterns, self.exclude)?;
        self.render_entries(entries, "");
        Ok(self.rendering)
    }

    fn render_dir(&mut self, path: &Path, prefix: &str) {
        debug!("Building structure for the path: {}", path.display());
        match (self.list)(path, &self.patterns, self.exclude) {
            Ok(entries) => self.render_entries(entries, prefix),
            Err(e) => {
                error!("An error occurred while building the structure: {}", e);
                notify(
                    &mut *self.console,
                    MessageKind::Error,
                    &format!("An error occurred while building the structure: {}", e),
                );
                self.rendering.skipped.push(path.to_path_buf());
            }
        }
    }

    fn render_entries(&mut self, entries: Vec<Entry>, prefix: &str) {
        let entries = order_entries(entries);
        let total = entries.len();

        for (i, entry) in entries.into_iter().enumerate() {
            let is_last = i == total - 1;
            let text = &mut self.rendering.text;
            text.push_str(prefix);
            text.push_str(connector(is_last));
            text.push_str(&entry.name);

            if entry.is_dir {
                debug!("Adding directory to structure: {}", entry.path.display());
                text.push(DIR_SUFFIX);
                text.push('\n');
                self.rendering.directories += 1;
                self.render_dir(&entry.path, &continuation_prefix(prefix, is_last));
            } else {
                debug!("Adding file to structure: {}", entry.path.display());
                text.push('\n');
                self.rendering.files += 1;
            }
        }
    }
}
