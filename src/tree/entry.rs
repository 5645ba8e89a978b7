//! Directory listing and entry classification

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use log::debug;

use crate::error::StructureError;

/// One immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Signature of a directory listing function, see [`list_entries`].
pub type Lister = fn(&Path, &[Pattern], Option<&Path>) -> Result<Vec<Entry>, StructureError>;

/// List the immediate children of `dir`.
///
/// Entries are classified by following symlinks. Anything that is neither a
/// directory nor a regular file (broken links, sockets, FIFOs) is dropped.
/// Entries whose names match `ignore_patterns` or whose path equals `exclude`
/// are dropped as well.
pub fn list_entries(
    dir: &Path,
    ignore_patterns: &[Pattern],
    exclude: Option<&Path>,
) -> Result<Vec<Entry>, StructureError> {
    let read_dir = fs::read_dir(dir).map_err(|source| StructureError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for item in read_dir {
        let item = item.map_err(|source| StructureError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = item.path();
        let name = item.file_name().to_string_lossy().to_string();

        if is_ignored(&name, ignore_patterns) {
            debug!("Ignoring entry: {}", path.display());
            continue;
        }
        if exclude.is_some_and(|excluded| excluded == path) {
            debug!("Skipping output file: {}", path.display());
            continue;
        }

        match fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => entries.push(Entry {
                name,
                path,
                is_dir: true,
            }),
            Ok(meta) if meta.is_file() => entries.push(Entry {
                name,
                path,
                is_dir: false,
            }),
            Ok(_) => debug!("Skipping special file: {}", path.display()),
            Err(e) => debug!("Skipping unreadable entry {}: {}", path.display(), e),
        }
    }

    Ok(entries)
}

/// Compile ignore patterns. Strings that are not valid globs are kept as
/// escaped literals so they still match names exactly.
pub fn compile_patterns(patterns: &[String]) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|p| {
            Pattern::new(p)
                .or_else(|_| Pattern::new(&Pattern::escape(p)))
                .ok()
        })
        .collect()
}

/// Check if a name matches any ignore pattern.
pub fn is_ignored(name: &str, patterns: &[Pattern]) -> bool {
    patterns
        .iter()
        .any(|pattern| pattern.as_str() == name || pattern.matches(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_classifies_entries() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("file.txt"), "x").unwrap();

        let mut entries = list_entries(dir.path(), &[], None).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "file.txt");
        assert!(!entries[0].is_dir);
        assert_eq!(entries[1].name, "sub");
        assert!(entries[1].is_dir);
    }

    #[test]
    fn test_list_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        let err = list_entries(&missing, &[], None).unwrap_err();
        assert!(matches!(err, StructureError::ReadDir { .. }));
    }

    #[test]
    fn test_list_excludes_path() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("keep.txt"), "x").unwrap();
        let out = dir.path().join("out.txt");
        fs::write(&out, "x").unwrap();

        let entries = list_entries(dir.path(), &[], Some(out.as_path())).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "keep.txt");
    }

    #[test]
    #[cfg(unix)]
    fn test_broken_symlink_dropped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("real.txt"), "x").unwrap();
        std::os::unix::fs::symlink("nowhere.txt", dir.path().join("broken.txt")).unwrap();

        let entries = list_entries(dir.path(), &[], None).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "real.txt");
    }

    #[test]
    #[cfg(unix)]
    fn test_symlinked_directory_is_directory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("link")).unwrap();

        let entries = list_entries(dir.path(), &[], None).unwrap();
        assert!(entries.iter().all(|e| e.is_dir));
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_ignore_patterns() {
        let patterns = compile_patterns(&["*.log".to_string(), "target".to_string()]);
        assert!(is_ignored("debug.log", &patterns));
        assert!(is_ignored("target", &patterns));
        assert!(!is_ignored("main.rs", &patterns));
        assert!(!is_ignored("targets", &patterns));
    }

    #[test]
    fn test_invalid_glob_matches_literally() {
        let patterns = compile_patterns(&["[broken".to_string()]);
        assert!(is_ignored("[broken", &patterns));
        assert!(!is_ignored("broken", &patterns));
    }
}
