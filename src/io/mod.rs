//! I/O operations for pdfzus.
//!
//! This module handles all file I/O:
//! - Loading input PDFs from disk, with an existence check up front
//! - Writing the merged PDF, atomically and with directory creation
//!
//! # Examples
//!
//! ```no_run
//! use pdfzus::io::{PdfReader, PdfWriter};
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = PdfReader::new();
//! let loaded = reader.load(Path::new("input.pdf")).await?;
//!
//! let writer = PdfWriter::new();
//! writer.save(&loaded.document, Path::new("output.pdf")).await?;
//! # Ok(())
//! # }
//! ```

pub mod reader;
pub mod writer;

pub use reader::{LoadedDocument, PdfReader};
pub use writer::{PdfWriter, WriteOptions};
