//! Raw dataset discovery under an inventory root.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};
use crate::layout::{entry_name, child_entries};

/// Suffix shared by every raw dataset directory name.
pub const RAW_SUFFIX: &str = "raw";

/// Number of datasets kept when scanning in debug mode.
pub const DEBUG_DATASET_LIMIT: usize = 11;

/// Lists raw dataset directories directly under `root`.
///
/// Returns directories whose name ends with `raw`, sorted by name and
/// truncated to `limit` entries when one is given.
pub fn list_raw_datasets(root: &Path, limit: Option<usize>) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut datasets: Vec<PathBuf> = child_entries(root)?
        .into_iter()
        .filter(|path| path.is_dir())
        .filter(|path| entry_name(path).is_some_and(|name| name.ends_with(RAW_SUFFIX)))
        .collect();

    if let Some(limit) = limit {
        datasets.truncate(limit);
    }

    Ok(datasets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();

        for name in &["ds003_raw", "ds001_raw", "ds002-raw", "ds001_derivatives", ".cache_raw"] {
            std::fs::create_dir(dir.path().join(name)).unwrap();
        }
        // A file is never a dataset, whatever its name.
        std::fs::write(dir.path().join("notes_raw"), "data").unwrap();

        dir
    }

    #[test]
    fn test_list_raw_datasets() {
        let dir = create_test_dir();
        let datasets = list_raw_datasets(dir.path(), None).unwrap();

        let names: Vec<&str> = datasets.iter().filter_map(|p| entry_name(p)).collect();
        assert_eq!(names, vec![".cache_raw", "ds001_raw", "ds002-raw", "ds003_raw"]);
    }

    #[test]
    fn test_list_raw_datasets_limit() {
        let dir = create_test_dir();
        let datasets = list_raw_datasets(dir.path(), Some(2)).unwrap();

        assert_eq!(datasets.len(), 2);
        assert_eq!(entry_name(&datasets[1]), Some("ds001_raw"));
    }

    #[test]
    fn test_list_raw_datasets_empty_dir() {
        let dir = TempDir::new().unwrap();
        let datasets = list_raw_datasets(dir.path(), None).unwrap();
        assert!(datasets.is_empty());
    }

    #[test]
    fn test_list_raw_datasets_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("plain_raw");
        std::fs::write(&file_path, "data").unwrap();

        let result = list_raw_datasets(&file_path, None);
        assert!(matches!(result, Err(IngestError::DirectoryNotFound { .. })));
    }
}
