//! File logging setup
//!
//! Log lines are appended to `<log dir>/structure-builder.log` through
//! `simplelog`. The returned [`Logging`] value records whether this call
//! installed the process logger; only the first installation prints the
//! startup banner.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use log::{LevelFilter, info};
use simplelog::{Config, ConfigBuilder, WriteLogger, format_description};

use crate::console::{ConsoleOutput, MessageKind, notify};
use crate::error::LogError;
use crate::paths::{APP_NAME, log_dir};

/// Banner printed and logged the first time logging is set up.
pub const BANNER: &str = "Structure Builder initialized successfully.";

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory for the log file; defaults to `~/.structure-builder/logs`
    pub dir: Option<PathBuf>,
    pub level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: None,
            level: LevelFilter::Info,
        }
    }
}

/// Initialized logging state, created once by the entry point.
#[derive(Debug)]
pub struct Logging {
    path: PathBuf,
    installed: bool,
}

impl Logging {
    /// Open the log file and install the file logger.
    ///
    /// If a logger is already installed for this process the file is still
    /// prepared, but the banner is not repeated.
    pub fn init<C: ConsoleOutput + ?Sized>(
        config: &LogConfig,
        console: &mut C,
    ) -> Result<Self, LogError> {
        let dir = match &config.dir {
            Some(dir) => dir.clone(),
            None => log_dir().ok_or(LogError::NoHomeDir)?,
        };
        fs::create_dir_all(&dir).map_err(|source| LogError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let path = dir.join(format!("{}.log", APP_NAME));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LogError::OpenFile {
                path: path.clone(),
                source,
            })?;

        let log_config = build_log_config();

        let installed = WriteLogger::init(config.level, log_config, file).is_ok();
        if installed {
            info!("{}", BANNER);
            notify(console, MessageKind::Status, BANNER);
        }

        Ok(Self { path, installed })
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether this call installed the process logger.
    pub fn installed(&self) -> bool {
        self.installed
    }
}

/// Log line layout: `YYYY-MM-DD HH:MM:SS [LEVEL] message`, in local time.
///
/// The local offset cannot be read once other threads are running; timestamps
/// then stay in UTC.
fn build_log_config() -> Config {
    let mut builder = ConfigBuilder::new();
    builder
        .set_time_format_custom(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ))
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off);
    let _ = builder.set_time_offset_to_local();
    builder.build()
}
