//! Error types for structure generation and logging setup

use std::io;
use std::path::PathBuf;

/// Errors that can occur while rendering or saving a structure.
#[derive(Debug, thiserror::Error)]
pub enum StructureError {
    /// The root path does not exist.
    #[error("root path '{}' does not exist", .path.display())]
    RootNotFound { path: PathBuf },

    /// The root path exists but is not a directory.
    #[error("root path '{}' is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    /// A directory could not be listed.
    #[error("cannot read directory '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be created or written.
    #[error("cannot write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A path could not be made absolute.
    #[error("cannot resolve path '{}': {source}", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors that can occur while setting up the log file.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Neither a home nor an application data directory could be determined.
    #[error("cannot determine the home directory")]
    NoHomeDir,

    /// The log directory could not be created.
    #[error("cannot create log directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The log file could not be opened for appending.
    #[error("cannot open log file '{}': {source}", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
