//! Console reporting
//!
//! `TerminalConsole` writes status lines and the echoed structure to stdout
//! with colors. `RecordingConsole` keeps everything in memory, for tests and
//! for callers that want to present messages themselves.

use std::io::{self, Write};

use log::warn;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Kind of a console status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Progress information (start, completion)
    Status,
    /// The structure was saved
    Success,
    /// Something failed
    Error,
}

/// Receives console output from a structure run.
pub trait ConsoleOutput {
    fn message(&mut self, kind: MessageKind, text: &str) -> io::Result<()>;

    /// Echo the rendered structure.
    fn structure(&mut self, text: &str) -> io::Result<()>;
}

/// Send a message to the console. Write failures are logged and otherwise ignored.
pub fn notify<C: ConsoleOutput + ?Sized>(console: &mut C, kind: MessageKind, text: &str) {
    if let Err(e) = console.message(kind, text) {
        warn!("Console write failed: {}", e);
    }
}

/// Console output to stdout, colored when enabled.
pub struct TerminalConsole {
    stdout: StandardStream,
}

impl TerminalConsole {
    pub fn new(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }

    fn write_structure_line(&mut self, line: &str) -> io::Result<()> {
        let Some(dir_name) = line.strip_suffix('/') else {
            return writeln!(self.stdout, "{}", line);
        };

        // Split "│   ├── name/" into glyphs and the directory name
        let split = dir_name
            .rfind("── ")
            .map(|i| i + "── ".len())
            .unwrap_or(0);
        let (glyphs, name) = dir_name.split_at(split);

        write!(self.stdout, "{}", glyphs)?;
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        write!(self.stdout, "{}/", name)?;
        self.stdout.reset()?;
        writeln!(self.stdout)
    }
}

impl ConsoleOutput for TerminalConsole {
    fn message(&mut self, kind: MessageKind, text: &str) -> io::Result<()> {
        match kind {
            MessageKind::Status => {}
            MessageKind::Success => {
                self.stdout
                    .set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            }
            MessageKind::Error => {
                self.stdout
                    .set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            }
        }
        write!(self.stdout, "{}", text)?;
        self.stdout.reset()?;
        writeln!(self.stdout)?;
        self.stdout.flush()
    }

    fn structure(&mut self, text: &str) -> io::Result<()> {
        for line in text.lines() {
            self.write_structure_line(line)?;
        }
        self.stdout.flush()
    }
}

/// Console output captured in memory.
#[derive(Debug, Default)]
pub struct RecordingConsole {
    pub messages: Vec<(MessageKind, String)>,
    pub structures: Vec<String>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages of the given kind, in order.
    pub fn of_kind(&self, kind: MessageKind) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, text)| text.as_str())
            .collect()
    }
}

impl ConsoleOutput for RecordingConsole {
    fn message(&mut self, kind: MessageKind, text: &str) -> io::Result<()> {
        self.messages.push((kind, text.to_string()));
        Ok(())
    }

    fn structure(&mut self, text: &str) -> io::Result<()> {
        self.structures.push(text.to_string());
        Ok(())
    }
}
