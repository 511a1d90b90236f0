//! Integration tests for error handling and edge cases.

use pdfzus::error::PdfzusError;
use pdfzus::merge::merge_files;
use pdfzus::output::OutputFormatter;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::common::{test_config, write_pdf};

#[tokio::test]
async fn test_error_single_input() {
    let temp_dir = TempDir::new().unwrap();
    let path_a = write_pdf(&temp_dir, "a.pdf", &[101]);
    let output = temp_dir.path().join("merged.pdf");

    let config = test_config(vec![path_a], output.clone(), &[]);
    let formatter = OutputFormatter::from_config(&config);

    let result = merge_files(&config, &formatter).await;
    assert!(result.is_err(), "Should fail with a single input");

    let err = result.unwrap_err();
    assert!(matches!(err, PdfzusError::NotEnoughInputs { count: 1 }));
    assert!(!output.exists(), "No output should be written on failure");
}

#[tokio::test]
async fn test_error_no_inputs() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("merged.pdf");

    let config = test_config(vec![], output.clone(), &[]);
    let formatter = OutputFormatter::from_config(&config);

    let result = merge_files(&config, &formatter).await;
    let err = result.unwrap_err();
    assert!(matches!(err, PdfzusError::NotEnoughInputs { count: 0 }));
}

#[tokio::test]
async fn test_error_nonexistent_input() {
    let temp_dir = TempDir::new().unwrap();
    let path_a = write_pdf(&temp_dir, "a.pdf", &[101]);
    let missing = temp_dir.path().join("missing.pdf");
    let output = temp_dir.path().join("merged.pdf");

    let config = test_config(vec![path_a, missing], output.clone(), &[]);
    let formatter = OutputFormatter::from_config(&config);

    let result = merge_files(&config, &formatter).await;
    assert!(result.is_err(), "Should fail with nonexistent file");

    let err = result.unwrap_err();
    assert!(matches!(err, PdfzusError::FileNotFound { .. }));
    assert!(!output.exists(), "No output should be written on failure");
}

#[tokio::test]
async fn test_error_corrupted_input() {
    let temp_dir = TempDir::new().unwrap();
    let path_a = write_pdf(&temp_dir, "a.pdf", &[101]);

    // An empty file is not a PDF.
    let corrupted = temp_dir.path().join("corrupted.pdf");
    std::fs::File::create(&corrupted).unwrap();

    let output = temp_dir.path().join("merged.pdf");
    let config = test_config(vec![path_a, corrupted], output.clone(), &[]);
    let formatter = OutputFormatter::from_config(&config);

    let result = merge_files(&config, &formatter).await;
    assert!(result.is_err(), "Should fail with corrupted PDF");

    let err = result.unwrap_err();
    assert!(matches!(err, PdfzusError::FailedToLoadPdf { .. }));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_error_malformed_range_flag_before_any_io() {
    // Inputs do not exist, but the flag error comes first because range
    // flags are parsed before any file is opened.
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("merged.pdf");

    let config = test_config(
        vec![PathBuf::from("missing1.pdf"), PathBuf::from("missing2.pdf")],
        output.clone(),
        &["justafilename"],
    );
    let formatter = OutputFormatter::from_config(&config);

    let result = merge_files(&config, &formatter).await;
    let err = result.unwrap_err();
    assert!(matches!(err, PdfzusError::InvalidRangeSpec { .. }));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_error_range_flag_without_file_part() {
    let temp_dir = TempDir::new().unwrap();
    let path_a = write_pdf(&temp_dir, "a.pdf", &[101]);
    let path_b = write_pdf(&temp_dir, "b.pdf", &[201]);
    let output = temp_dir.path().join("merged.pdf");

    let config = test_config(vec![path_a, path_b], output.clone(), &["=1-3"]);
    let formatter = OutputFormatter::from_config(&config);

    let result = merge_files(&config, &formatter).await;
    let err = result.unwrap_err();
    assert!(matches!(err, PdfzusError::InvalidRangeSpec { .. }));
}

#[tokio::test]
async fn test_error_range_flag_with_empty_pages() {
    let temp_dir = TempDir::new().unwrap();
    let path_a = write_pdf(&temp_dir, "a.pdf", &[101]);
    let path_b = write_pdf(&temp_dir, "b.pdf", &[201]);
    let output = temp_dir.path().join("merged.pdf");

    let config = test_config(vec![path_a, path_b], output.clone(), &["a.pdf="]);
    let formatter = OutputFormatter::from_config(&config);

    let result = merge_files(&config, &formatter).await;
    let err = result.unwrap_err();
    assert!(matches!(err, PdfzusError::InvalidRangeSpec { .. }));
}

#[tokio::test]
async fn test_error_range_flag_with_blank_pages() {
    let temp_dir = TempDir::new().unwrap();
    let path_a = write_pdf(&temp_dir, "a.pdf", &[101]);
    let path_b = write_pdf(&temp_dir, "b.pdf", &[201]);
    let output = temp_dir.path().join("merged.pdf");

    // Whitespace after the equals sign is a range that exists but is blank.
    let config = test_config(vec![path_a, path_b], output.clone(), &["a.pdf=   "]);
    let formatter = OutputFormatter::from_config(&config);

    let result = merge_files(&config, &formatter).await;
    let err = result.unwrap_err();
    assert!(matches!(err, PdfzusError::EmptyRange { .. }));
}

#[tokio::test]
async fn test_error_output_same_as_input() {
    let temp_dir = TempDir::new().unwrap();
    let path_a = write_pdf(&temp_dir, "a.pdf", &[101]);
    let path_b = write_pdf(&temp_dir, "b.pdf", &[201]);

    let config = test_config(vec![path_a.clone(), path_b], path_a, &[]);
    let result = config.validate();
    assert!(result.is_err(), "Should fail when output same as input");
}

#[tokio::test]
async fn test_exit_codes_for_common_failures() {
    assert_eq!(
        PdfzusError::NotEnoughInputs { count: 1 }.exit_code(),
        1,
        "Usage errors exit with 1"
    );
    assert_eq!(
        PdfzusError::file_not_found(PathBuf::from("x.pdf")).exit_code(),
        2
    );
    assert_eq!(
        PdfzusError::failed_to_load_pdf(PathBuf::from("x.pdf"), "bad header").exit_code(),
        3
    );
}
