//! PDF document loading.
//!
//! This module loads input PDFs for the merge pipeline. Every load
//! starts with an existence probe so a missing file surfaces as
//! [`PdfzusError::FileNotFound`] instead of a parser error, and ends
//! with a page-count check so empty documents are rejected early.
//!
//! # Examples
//!
//! ```no_run
//! use pdfzus::io::PdfReader;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::new();
//! let loaded = reader.load(Path::new("input.pdf")).await?;
//! println!("{} pages", loaded.page_count);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::path::{Path, PathBuf};

use crate::error::{PdfzusError, Result};

/// A successfully loaded PDF document.
#[derive(Debug)]
pub struct LoadedDocument {
    /// The parsed document.
    pub document: Document,
    /// Path the document was loaded from.
    pub path: PathBuf,
    /// Page count as reported by the page tree.
    pub page_count: usize,
}

/// Loads PDF documents from disk.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new PDF reader.
    pub fn new() -> Self {
        Self
    }

    /// Load the PDF at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PdfzusError::FileNotFound`] if the path does not exist
    /// and [`PdfzusError::FailedToLoadPdf`] if the file cannot be parsed
    /// or contains no pages.
    pub async fn load(&self, path: &Path) -> Result<LoadedDocument> {
        let path_buf = path.to_path_buf();

        // Probe existence first; lopdf reports a missing file as a
        // generic parse failure.
        if tokio::fs::metadata(&path_buf).await.is_err() {
            return Err(PdfzusError::file_not_found(path_buf));
        }

        let document = Document::load(&path_buf)
            .await
            .map_err(|e| PdfzusError::failed_to_load_pdf(path_buf.clone(), e.to_string()))?;

        let page_count = document.get_pages().len();
        if page_count == 0 {
            return Err(PdfzusError::failed_to_load_pdf(path_buf, "PDF has no pages"));
        }

        Ok(LoadedDocument {
            document,
            path: path_buf,
            page_count,
        })
    }
}
