//! Test harness for structure-builder integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn name(&self) -> String {
        self.dir
            .path()
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

/// Run the binary in `dir`, logging into a throwaway directory.
pub fn run_builder(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_structure-builder");
    let log_dir = TempDir::new().expect("Failed to create log dir");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env("STRUCTURE_BUILDER_LOG_DIR", log_dir.path())
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run structure-builder");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Run the binary in `dir` with extra environment variables and return the
/// contents of the log file it wrote.
pub fn run_logged(dir: &Path, args: &[&str], envs: &[(&str, &str)]) -> String {
    let binary = env!("CARGO_BIN_EXE_structure-builder");
    let log_dir = TempDir::new().expect("Failed to create log dir");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env("STRUCTURE_BUILDER_LOG_DIR", log_dir.path())
        .env("NO_COLOR", "1")
        .envs(envs.iter().copied())
        .output()
        .expect("Failed to run structure-builder");
    assert!(output.status.success());

    fs::read_to_string(log_dir.path().join("structure-builder.log")).expect("Failed to read log file")
}

/// Minutes since midnight of a `YYYY-MM-DD HH:MM:SS` log line prefix.
pub fn log_minute_of_day(line: &str) -> Option<u32> {
    let hour: u32 = line.get(11..13)?.parse().ok()?;
    let minute: u32 = line.get(14..16)?.parse().ok()?;
    Some(hour * 60 + minute)
}

/// Render `tree` into a file outside of it and return the file's contents.
pub fn render_tree(tree: &TestTree, extra_args: &[&str]) -> String {
    let out_dir = TempDir::new().expect("Failed to create output dir");
    let output = out_dir.path().join("structure.txt");
    let output_arg = output.to_string_lossy().to_string();

    let mut args = vec!["-o", output_arg.as_str()];
    args.extend_from_slice(extra_args);
    let (stdout, _stderr, success) = run_builder(tree.path(), &args);
    assert!(success, "structure-builder should succeed: {}", stdout);

    fs::read_to_string(&output).unwrap_or_else(|e| panic!("no output file ({}): {}", e, stdout))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let tree = TestTree::new();
        let file_path = tree.add_file("nested/test.txt", "content");
        assert!(file_path.exists());
    }
}
