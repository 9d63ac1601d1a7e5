//! Integration tests for the pipeline module.

use std::fs;
use std::path::{Path, PathBuf};

use bids_cli::pipeline::{OutputConfig, ScanOptions, scan_roots, write_outputs};
use bids_model::{Diagnostic, DiagnosticSeverity, InventoryError};
use tempfile::TempDir;

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("parent")).expect("create parent");
    fs::write(&path, "").expect("write file");
}

fn bids_dataset(root: &Path, name: &str, subjects: usize) -> PathBuf {
    let dataset = root.join(name);
    fs::create_dir_all(&dataset).expect("create dataset");
    for index in 1..=subjects {
        touch(
            &dataset,
            &format!("sub-{index:02}/func/sub-{index:02}_task-rest_bold.nii.gz"),
        );
    }
    dataset
}

fn output_config(dir: &TempDir) -> OutputConfig {
    OutputConfig {
        tsv: dir.path().join("tools").join("datasets_raw.tsv"),
        markdown: dir.path().join("src").join("datasets_raw.md"),
    }
}

#[test]
fn root_without_raw_datasets_yields_empty_table() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("derivatives")).unwrap();

    let inventory = scan_roots(&[dir.path().to_path_buf()], ScanOptions::default()).unwrap();

    assert_eq!(inventory.candidates, 0);
    assert!(inventory.table.is_empty());
    assert!(inventory.diagnostics.is_empty());
}

#[test]
fn datasets_without_subjects_are_left_out() {
    let dir = TempDir::new().unwrap();
    bids_dataset(dir.path(), "ds002_raw", 2);
    bids_dataset(dir.path(), "ds001_raw", 0);
    touch(&dir.path().join("ds001_raw"), "participants.tsv");

    let inventory = scan_roots(&[dir.path().to_path_buf()], ScanOptions::default()).unwrap();

    assert_eq!(inventory.candidates, 2);
    let names: Vec<&str> = inventory.table.names().collect();
    assert_eq!(names, vec!["ds002_raw"]);
    assert_eq!(inventory.diagnostics.len(), 1);
    assert_eq!(
        inventory.diagnostics.iter().next().map(Diagnostic::severity),
        Some(DiagnosticSeverity::Info)
    );
}

#[test]
fn tsv_round_trip_matches_qualifying_datasets() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("raw");
    for name in ["ds010_raw", "ds003_raw", "ds007_raw", "ds005_raw"] {
        bids_dataset(&root, name, 1);
    }
    bids_dataset(&root, "ds004_raw", 0);

    let inventory = scan_roots(&[root], ScanOptions::default()).unwrap();
    let outputs = write_outputs(&inventory.table, &output_config(&dir)).unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_path(&outputs.tsv)
        .expect("open tsv");
    let names: Vec<String> = reader
        .records()
        .map(|record| record.expect("record")[0].to_string())
        .collect();

    assert_eq!(names.len(), 4);
    let mut sorted = names.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(names, sorted);

    let markdown = fs::read_to_string(&outputs.markdown).unwrap();
    assert!(markdown.contains("ds010_raw"));
    assert!(!markdown.contains("has_participant_tsv"));
}

#[test]
fn duplicate_names_fail_before_any_output() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("site_a");
    let second = dir.path().join("site_b");
    bids_dataset(&first, "ds001_raw", 1);
    bids_dataset(&second, "ds001_raw", 2);

    let config = output_config(&dir);
    fs::create_dir_all(config.tsv.parent().unwrap()).unwrap();
    fs::write(&config.tsv, "previous run\n").unwrap();

    let err = scan_roots(&[first, second], ScanOptions::default()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<InventoryError>(),
        Some(InventoryError::DuplicateDataset { name }) if name == "ds001_raw"
    ));

    assert_eq!(fs::read_to_string(&config.tsv).unwrap(), "previous run\n");
    assert!(!config.markdown.exists());
}

#[test]
fn debug_scan_limits_candidates() {
    let dir = TempDir::new().unwrap();
    for index in 0..15 {
        bids_dataset(dir.path(), &format!("ds{index:03}_raw"), 1);
    }

    let inventory = scan_roots(&[dir.path().to_path_buf()], ScanOptions::debug()).unwrap();

    assert_eq!(inventory.candidates, 11);
    assert_eq!(inventory.table.len(), 11);
    assert_eq!(inventory.table.names().last(), Some("ds010_raw"));
}

#[test]
fn missing_root_is_fatal() {
    let dir = TempDir::new().unwrap();
    let result = scan_roots(&[dir.path().join("absent")], ScanOptions::default());
    assert!(result.is_err());
}
