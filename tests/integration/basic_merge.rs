//! Integration tests for basic PDF merging operations.

use lopdf::Document;
use pdfzus::merge::merge_files;
use pdfzus::output::OutputFormatter;
use tempfile::TempDir;

use crate::common::{page_widths, test_config, write_pdf};

#[tokio::test]
async fn test_merge_two_pdfs_preserves_order() {
    let temp_dir = TempDir::new().unwrap();
    let path_a = write_pdf(&temp_dir, "a.pdf", &[101, 102, 103]);
    let path_b = write_pdf(&temp_dir, "b.pdf", &[201, 202]);
    let output = temp_dir.path().join("merged.pdf");

    let config = test_config(vec![path_a, path_b], output.clone(), &[]);
    let formatter = OutputFormatter::from_config(&config);

    let result = merge_files(&config, &formatter).await;
    assert!(result.is_ok(), "Merge failed: {:?}", result.err());

    let outcome = result.unwrap();
    assert_eq!(outcome.files_merged, 2);
    assert_eq!(outcome.total_pages, 5);
    assert_eq!(outcome.fallback_warnings, 0);
    assert!(output.exists(), "Output file was not created");

    let merged = Document::load(&output).await.unwrap();
    assert_eq!(page_widths(&merged), vec![101, 102, 103, 201, 202]);
}

#[tokio::test]
async fn test_merge_three_files_in_input_order() {
    let temp_dir = TempDir::new().unwrap();
    let path_a = write_pdf(&temp_dir, "a.pdf", &[101]);
    let path_b = write_pdf(&temp_dir, "b.pdf", &[201]);
    let path_c = write_pdf(&temp_dir, "c.pdf", &[301]);
    let output = temp_dir.path().join("merged.pdf");

    // Not alphabetical: the command line order is what counts.
    let config = test_config(vec![path_c, path_a, path_b], output.clone(), &[]);
    let formatter = OutputFormatter::from_config(&config);

    merge_files(&config, &formatter).await.unwrap();

    let merged = Document::load(&output).await.unwrap();
    assert_eq!(page_widths(&merged), vec![301, 101, 201]);
}

#[tokio::test]
async fn test_merge_same_file_twice() {
    let temp_dir = TempDir::new().unwrap();
    let path_a = write_pdf(&temp_dir, "a.pdf", &[101, 102]);
    let output = temp_dir.path().join("merged.pdf");

    let config = test_config(vec![path_a.clone(), path_a], output.clone(), &[]);
    let formatter = OutputFormatter::from_config(&config);

    let outcome = merge_files(&config, &formatter).await.unwrap();
    assert_eq!(outcome.files_merged, 2);
    assert_eq!(outcome.total_pages, 4);

    let merged = Document::load(&output).await.unwrap();
    assert_eq!(page_widths(&merged), vec![101, 102, 101, 102]);
}

#[tokio::test]
async fn test_merge_creates_output_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path_a = write_pdf(&temp_dir, "a.pdf", &[101]);
    let path_b = write_pdf(&temp_dir, "b.pdf", &[201]);
    let output = temp_dir.path().join("nested/deeper/merged.pdf");

    let config = test_config(vec![path_a, path_b], output.clone(), &[]);
    let formatter = OutputFormatter::from_config(&config);

    merge_files(&config, &formatter).await.unwrap();
    assert!(output.exists());
}

#[tokio::test]
async fn test_merge_verbose_run_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let path_a = write_pdf(&temp_dir, "a.pdf", &[101]);
    let path_b = write_pdf(&temp_dir, "b.pdf", &[201]);
    let output = temp_dir.path().join("merged.pdf");

    let mut config = test_config(vec![path_a, path_b], output.clone(), &[]);
    config.verbose = true;
    let formatter = OutputFormatter::from_config(&config);

    let outcome = merge_files(&config, &formatter).await.unwrap();
    assert_eq!(outcome.total_pages, 2);
    assert!(output.exists());
}
