//! Path helpers: resolution, output naming and the log location.

use std::path::{Component, Path, PathBuf};

use directories::BaseDirs;
use log::debug;

use crate::error::StructureError;
use crate::tree::split_extension;

/// Application name used for the log directory and file.
pub const APP_NAME: &str = "structure-builder";

/// Suffix appended to the root name for the default output file.
const OUTPUT_SUFFIX: &str = "_structure.txt";

/// Make `path` absolute against the current directory and remove `.` and
/// `..` components lexically. Symlinks are not resolved.
pub fn resolve(path: &Path) -> Result<PathBuf, StructureError> {
    let absolute = std::path::absolute(path).map_err(|source| StructureError::Resolve {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalize(&absolute))
}

/// Lexically normalize a path. `..` at the root stays at the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = normalized.components().next_back();
                match last {
                    Some(Component::Normal(_)) => {
                        normalized.pop();
                    }
                    Some(Component::RootDir | Component::Prefix(_)) => {}
                    _ => normalized.push(component),
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Base name of a directory as shown on the first line of the structure.
///
/// The filesystem root has no base name and renders as an empty string.
pub fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Default output file: `<root>/<root-name>_structure.txt`.
pub fn default_output_path(root: &Path) -> PathBuf {
    root.join(format!("{}{}", root_name(root), OUTPUT_SUFFIX))
}

/// Return `path` if nothing exists there yet, otherwise the first free
/// sibling with a counter before the extension (`out.txt` → `out1.txt`).
pub fn unique_filename(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let (stem, extension) = split_extension(&name);

    let mut candidate = path.to_path_buf();
    let mut counter = 1u64;
    while candidate.exists() {
        candidate = path.with_file_name(format!("{}{}{}", stem, counter, extension));
        counter += 1;
    }

    debug!("Unique filename generated: {}", candidate.display());
    candidate
}

/// Default log directory: `~/.structure-builder/logs`.
///
/// On Windows the roaming application data directory stands in for home.
pub fn log_dir() -> Option<PathBuf> {
    let dirs = BaseDirs::new()?;
    let base = if cfg!(windows) {
        dirs.config_dir()
    } else {
        dirs.home_dir()
    };
    Some(base.join(format!(".{}", APP_NAME)).join("logs"))
}
