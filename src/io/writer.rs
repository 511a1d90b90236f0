//! PDF document writing.
//!
//! Saving runs the lopdf serializer on a blocking thread so the async
//! runtime stays responsive. By default the bytes go to a `.tmp`
//! sibling first and are renamed into place, so a crash mid-write
//! never leaves a truncated output file.
//!
//! # Examples
//!
//! ```no_run
//! use pdfzus::io::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # async fn example(document: Document) -> Result<(), Box<dyn std::error::Error>> {
//! let writer = PdfWriter::new();
//! writer.save(&document, Path::new("merged.pdf")).await?;
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::task;

use crate::error::{PdfzusError, Result};

/// Options for writing the output document.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Write to a temporary file and rename into place.
    pub atomic: bool,
    /// Compress content streams before writing.
    pub compress: bool,
    /// Renumber objects for a compact cross-reference table.
    pub optimize: bool,
    /// Buffer size for file writing.
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            compress: true,
            optimize: true,
            buffer_size: 8192,
        }
    }
}

/// Writes PDF documents to disk.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a writer with default options.
    pub fn new() -> Self {
        Self {
            options: WriteOptions::default(),
        }
    }

    /// Create a writer that applies `options` on every save.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Save a document to `path`, creating parent directories as
    /// needed and overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`PdfzusError::FailedToCreateOutput`] if a directory or
    /// the file itself cannot be created, and
    /// [`PdfzusError::FailedToWrite`] if serialization fails.
    pub async fn save(&self, document: &Document, path: &Path) -> Result<()> {
        let output = path.to_path_buf();
        let options = self.options.clone();

        if let Some(parent) = output.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| PdfzusError::FailedToCreateOutput {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }

        let document = document.clone();

        task::spawn_blocking(move || write_blocking(document, output, &options))
            .await
            .map_err(|e| PdfzusError::other(format!("Write task failed: {e}")))?
    }
}

/// Serializes `document` to `output` according to `options`.
///
/// Runs on a blocking thread; lopdf's serializer is synchronous.
fn write_blocking(mut document: Document, output: PathBuf, options: &WriteOptions) -> Result<()> {
    if options.compress {
        document.compress();
    }

    if options.optimize {
        document.renumber_objects();
    }

    let target = if options.atomic {
        output.with_extension("tmp")
    } else {
        output.clone()
    };

    let file =
        std::fs::File::create(&target).map_err(|e| PdfzusError::FailedToCreateOutput {
            path: target.clone(),
            source: e,
        })?;
    let mut sink = std::io::BufWriter::with_capacity(options.buffer_size, file);

    document
        .save_to(&mut sink)
        .map_err(|e| PdfzusError::FailedToWrite {
            path: target.clone(),
            source: std::io::Error::other(e.to_string()),
        })?;

    sink.flush().map_err(|e| PdfzusError::FailedToWrite {
        path: target.clone(),
        source: e,
    })?;

    if options.atomic {
        std::fs::rename(&target, &output).map_err(|e| PdfzusError::FailedToWrite {
            path: output.clone(),
            source: e,
        })?;
    }

    Ok(())
}
