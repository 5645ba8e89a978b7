//! TreeBuilder - renders a directory tree and saves it to a file

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{debug, error, info, warn};

use crate::console::{ConsoleOutput, MessageKind, RecordingConsole, notify};
use crate::error::StructureError;
use crate::paths::{resolve, root_name};

use super::config::BuilderConfig;
use super::render::{DIR_SUFFIX, Renderer, Rendering};

/// Summary of a saved structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureReport {
    pub root_name: String,
    pub output: PathBuf,
    /// Full text as written, including the root line
    pub text: String,
    pub directories: usize,
    pub files: usize,
    /// Directories whose contents could not be listed
    pub skipped: Vec<PathBuf>,
}

/// Renders directory structures and persists them.
pub struct TreeBuilder {
    config: BuilderConfig,
}

impl TreeBuilder {
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    /// Render `root` and write the result to `output`, reporting progress on
    /// `console`.
    ///
    /// Errors are logged and reported on the console rather than returned.
    /// Returns `None` when the run failed, in which case no output file
    /// created by this run is left behind.
    pub fn generate<C: ConsoleOutput + ?Sized>(
        &self,
        root: &Path,
        output: &Path,
        console: &mut C,
    ) -> Option<StructureReport> {
        let started = Instant::now();
        let root = resolve(root).unwrap_or_else(|_| root.to_path_buf());

        let start_message = format!(
            "Generating structure for the root path: '{}'...",
            root.display()
        );
        info!("{}", start_message);
        notify(console, MessageKind::Status, &start_message);

        match self.run(&root, output, console) {
            Ok(report) => {
                let saved_message = format!(
                    "Project structure of '{}' has been saved to '{}'.",
                    report.root_name,
                    report.output.display()
                );
                info!("{}", saved_message);
                notify(console, MessageKind::Success, &saved_message);

                if self.config.display_structure {
                    if let Err(e) = console.structure(&report.text) {
                        warn!("Console write failed: {}", e);
                    }
                }

                let elapsed = Duration::from_millis(started.elapsed().as_millis() as u64);
                info!(
                    "Structure generation process completed in {} ({} directories, {} files).",
                    humantime::format_duration(elapsed),
                    report.directories,
                    report.files
                );
                notify(
                    console,
                    MessageKind::Status,
                    "Structure generation process completed.",
                );
                Some(report)
            }
            Err(e) => {
                error!(
                    "An error occurred while generating the structure of '{}': {}",
                    root_name(&root),
                    e
                );
                notify(console, MessageKind::Error, &format!("An error occurred: {}", e));
                None
            }
        }
    }

    /// Render and save without console reporting, returning errors to the
    /// caller. Subtree listing failures still only skip that subtree.
    pub fn try_generate(&self, root: &Path, output: &Path) -> Result<StructureReport, StructureError> {
        let root = resolve(root)?;
        self.run(&root, output, &mut RecordingConsole::new())
    }

    /// Render `root` into the full structure text, root line included.
    pub fn render<C: ConsoleOutput + ?Sized>(
        &self,
        root: &Path,
        console: &mut C,
    ) -> Result<String, StructureError> {
        let root = resolve(root)?;
        check_root(&root)?;
        let rendering = Renderer::new(&self.config, console).render(&root)?;
        Ok(with_root_line(&root_name(&root), &rendering))
    }

    fn run<C: ConsoleOutput + ?Sized>(
        &self,
        root: &Path,
        output: &Path,
        console: &mut C,
    ) -> Result<StructureReport, StructureError> {
        check_root(root)?;
        let output = resolve(output)?;
        let name = root_name(root);

        let rendering = Renderer::new(&self.config, console)
            .excluding(&output)
            .render(root)?;
        let text = with_root_line(&name, &rendering);

        persist(&output, &text)?;

        Ok(StructureReport {
            root_name: name,
            output,
            text,
            directories: rendering.directories,
            files: rendering.files,
            skipped: rendering.skipped,
        })
    }
}

fn check_root(root: &Path) -> Result<(), StructureError> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(StructureError::NotADirectory {
            path: root.to_path_buf(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(StructureError::RootNotFound {
            path: root.to_path_buf(),
        }),
        Err(source) => Err(StructureError::ReadDir {
            path: root.to_path_buf(),
            source,
        }),
    }
}

fn with_root_line(name: &str, rendering: &Rendering) -> String {
    let mut text = String::with_capacity(name.len() + 2 + rendering.text.len());
    text.push_str(name);
    text.push(DIR_SUFFIX);
    text.push('\n');
    text.push_str(&rendering.text);
    text
}

/// Write `text` to `path` in a single write, removing the file again if the
/// write fails after it was created.
pub fn persist(path: &Path, text: &str) -> Result<(), StructureError> {
    persist_with(path, text, |p| File::create(p))
}

/// Like [`persist`], with the file opened by `create`.
pub fn persist_with<W, F>(path: &Path, text: &str, create: F) -> Result<(), StructureError>
where
    W: Write,
    F: FnOnce(&Path) -> io::Result<W>,
{
    let write_error = |source| StructureError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = create(path).map_err(write_error)?;
    let written = file.write_all(text.as_bytes()).and_then(|()| file.flush());
    drop(file);

    if let Err(source) = written {
        if let Err(e) = fs::remove_file(path) {
            debug!("Could not remove partial output {}: {}", path.display(), e);
        }
        return Err(write_error(source));
    }
    Ok(())
}
