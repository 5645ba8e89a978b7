//! structure-builder - render a directory tree as a text diagram and save it

pub mod console;
pub mod error;
pub mod logging;
pub mod paths;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use console::{ConsoleOutput, MessageKind, RecordingConsole, TerminalConsole};
pub use error::{LogError, StructureError};
pub use logging::{LogConfig, Logging};
pub use paths::{default_output_path, unique_filename};
pub use tree::{BuilderConfig, StructureReport, TreeBuilder, natural_cmp};
