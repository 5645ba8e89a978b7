//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree is automatically removed when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Name of the temporary directory, as shown on the root line.
    pub fn name(&self) -> String {
        self.dir
            .path()
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an (empty) directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Build a balanced tree: `width` directories per level, `depth` levels,
    /// and `files` numbered files in every directory.
    pub fn balanced(width: usize, depth: usize, files: usize) -> Self {
        let tree = Self::new();
        tree.fill(tree.path().to_path_buf(), width, depth, files);
        tree
    }

    fn fill(&self, dir: PathBuf, width: usize, depth: usize, files: usize) {
        for i in 0..files {
            fs::write(dir.join(format!("file{}.txt", i)), "").expect("Failed to write file");
        }
        if depth == 0 {
            return;
        }
        for i in 0..width {
            let child = dir.join(format!("dir{}", i));
            fs::create_dir_all(&child).expect("Failed to create dir");
            self.fill(child, width, depth - 1, files);
        }
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
