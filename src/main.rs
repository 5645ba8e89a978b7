//! CLI entry point for structure-builder

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use log::{LevelFilter, debug, warn};
use structure_builder::console::notify;
use structure_builder::paths::resolve;
use structure_builder::{
    BuilderConfig, ConsoleOutput, LogConfig, Logging, MessageKind, TerminalConsole, TreeBuilder,
    default_output_path, unique_filename,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "structure-builder")]
#[command(about = "Render a directory tree as a text diagram and save it to a file")]
#[command(version)]
struct Args {
    /// Directory to render
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Output file (default: <PATH>/<name>_structure.txt)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Pick a new numbered file name instead of overwriting the output
    #[arg(long = "no-overwrite")]
    no_overwrite: bool,

    /// Print the structure to the console after saving it
    #[arg(short, long)]
    print: bool,

    /// Open the saved file in the default viewer
    #[arg(long)]
    open: bool,

    /// Leave out entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Directory for the log file
    #[arg(long = "log-dir", value_name = "DIR", env = "STRUCTURE_BUILDER_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Write debug-level details to the log file
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    let mut console = TerminalConsole::new(should_use_color(args.color));

    let log_config = LogConfig {
        dir: args.log_dir.clone(),
        level: if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
    };
    match Logging::init(&log_config, &mut console) {
        Ok(logging) => debug!("Logging to {}", logging.path().display()),
        Err(e) => eprintln!("structure-builder: logging disabled: {}", e),
    }

    let root = resolve(&args.path).unwrap_or_else(|_| args.path.clone());
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&root));
    let output = if args.no_overwrite {
        unique_filename(&output)
    } else {
        output
    };

    debug!("Root path: {}", root.display());
    debug!("Output file path: {}", output.display());

    let config = BuilderConfig {
        display_structure: args.print,
        ignore_patterns: args.ignore.clone(),
    };
    let report = TreeBuilder::new(config).generate(&root, &output, &mut console);

    if let Some(report) = report {
        if args.open {
            open_in_viewer(&report.output, &mut console);
        }
    }
}

/// Launch the platform viewer for the saved file. Failures are reported as status.
fn open_in_viewer(path: &Path, console: &mut dyn ConsoleOutput) {
    if let Err(e) = open::that(path) {
        warn!("Could not open '{}': {}", path.display(), e);
        notify(
            console,
            MessageKind::Status,
            &format!("Could not open '{}': {}", path.display(), e),
        );
    }
}
