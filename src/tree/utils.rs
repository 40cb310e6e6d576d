//! Shared utility functions for tree walking

use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::debug;

use crate::error::{Result, TreeError};

use super::config::WalkerConfig;

/// A directory entry after exclusion filtering and sorting.
#[derive(Debug)]
pub(crate) struct ListedEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Check if a base name is excluded by the config.
///
/// Exclusion names are compared literally; ignore patterns also match as
/// globs, so `-I '*.log'` works the way it does in tree(1).
pub fn is_excluded(name: &str, config: &WalkerConfig) -> bool {
    if config.exclude_names.iter().any(|n| n == name) {
        return true;
    }
    config
        .ignore_patterns
        .iter()
        .any(|p| p == name || glob_match(p, name))
}

/// Resolve the root to an absolute, canonical path and return it with its
/// base name, which becomes the first output line.
pub(crate) fn canonical_root(path: &Path) -> Result<(PathBuf, String)> {
    let canonical = path
        .canonicalize()
        .map_err(|source| TreeError::PathResolution {
            path: path.to_path_buf(),
            source,
        })?;
    let name = canonical
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| canonical.display().to_string());
    Ok((canonical, name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

/// List the entries directly under `path`, drop excluded names, and sort the
/// rest by file name (byte order).
///
/// A failed `read_dir` is fatal: the error propagates and the run aborts
/// with no partial-result recovery. Directory-ness follows symlink targets;
/// there is no cycle detection.
pub(crate) fn list_entries(path: &Path, config: &WalkerConfig) -> Result<Vec<ListedEntry>> {
    let read = std::fs::read_dir(path).map_err(|source| TreeError::DirectoryRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for entry in read {
        let entry = entry.map_err(|source| TreeError::DirectoryRead {
            path: path.to_path_buf(),
            source,
        })?;
        entries.push(entry);
    }
    entries.sort_by_key(|e| e.file_name());

    let mut listed = Vec::new();
    for entry in entries {
        let name = entry.file_name().to_string_lossy().to_string();
        if is_excluded(&name, config) {
            debug!(name = %name, "skipping excluded entry");
            continue;
        }
        let entry_path = entry.path();
        let is_dir = entry_path.is_dir();
        listed.push(ListedEntry {
            name,
            path: entry_path,
            is_dir,
        });
    }
    Ok(listed)
}
