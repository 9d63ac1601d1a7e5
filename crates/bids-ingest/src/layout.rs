//! Directory listing helpers mirroring shell-glob levels.
//!
//! Each helper expands one path component: `sub-*`, `ses-*` or `*`.
//! Dot-prefixed names match like any other name.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

pub const SUBJECT_PREFIX: &str = "sub-";
pub const SESSION_PREFIX: &str = "ses-";

/// Name of the final path component, when it is valid UTF-8.
pub fn entry_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}

/// Lists the entries of `dir`, sorted by name.
///
/// A path that is not a directory has no entries.
pub fn child_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut paths = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        paths.push(entry.path());
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Expands one glob level below each of `parents`.
///
/// With a prefix only names starting with it match; without one every
/// visible entry matches.
pub fn expand(parents: &[PathBuf], prefix: Option<&str>) -> Result<Vec<PathBuf>> {
    let mut matches = Vec::new();
    for parent in parents {
        for path in child_entries(parent)? {
            let keep = match (prefix, entry_name(&path)) {
                (Some(prefix), Some(name)) => name.starts_with(prefix),
                (None, _) => true,
                (Some(_), None) => false,
            };
            if keep {
                matches.push(path);
            }
        }
    }
    Ok(matches)
}

/// `sub-*` below the dataset root (files included, they have no children).
pub fn subject_entries(dataset: &Path) -> Result<Vec<PathBuf>> {
    expand(&[dataset.to_path_buf()], Some(SUBJECT_PREFIX))
}

/// `sub-*/ses-*` below the dataset root.
pub fn session_entries(dataset: &Path) -> Result<Vec<PathBuf>> {
    let subjects = subject_entries(dataset)?;
    expand(&subjects, Some(SESSION_PREFIX))
}

/// `sub-*/ses-*/*` when the dataset has sessions, `sub-*/*` otherwise.
pub fn datatype_entries(dataset: &Path, has_sessions: bool) -> Result<Vec<PathBuf>> {
    let parents = if has_sessions {
        session_entries(dataset)?
    } else {
        subject_entries(dataset)?
    };
    expand(&parents, None)
}

/// `sub-*/ses-*/*/*` when the dataset has sessions, `sub-*/*/*` otherwise.
pub fn data_file_entries(dataset: &Path, has_sessions: bool) -> Result<Vec<PathBuf>> {
    let datatypes = datatype_entries(dataset, has_sessions)?;
    expand(&datatypes, None)
}
