//! pdfzus - Merge PDF files into a single document.
//!
//! Concatenates PDFs in input order, with optional `FILE=PAGES` flags
//! selecting which pages each file contributes. Page numbers outside a
//! document are clamped to its bounds, flags match their file by
//! resolved path, typed path, or bare name, and a flag that cannot be
//! interpreted falls back to the whole file with a warning rather than
//! aborting the run.
//!
//! # Examples
//!
//! Merging two files, taking only the first three pages of the intro:
//!
//! ```no_run
//! use pdfzus::config::Config;
//! use pdfzus::merge;
//! use pdfzus::output::OutputFormatter;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     inputs: vec![PathBuf::from("intro.pdf"), PathBuf::from("body.pdf")],
//!     output: PathBuf::from("book.pdf"),
//!     ranges: vec!["intro.pdf=1-3".to_string()],
//!     verbose: false,
//! };
//!
//! let formatter = OutputFormatter::from_config(&config);
//! let outcome = merge::merge_files(&config, &formatter).await?;
//! println!("Created {} page document", outcome.total_pages);
//! # Ok(())
//! # }
//! ```
//!
//! The pieces also work on their own, for callers that want the range
//! engine or the PDF I/O without the full pipeline:
//!
//! ```no_run
//! use pdfzus::io::{PdfReader, PdfWriter};
//! use pdfzus::merge::{parse_range_spec, resolve_page_range};
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let entries = parse_range_spec("report.pdf=1,3-5")?;
//! let pages = resolve_page_range(&entries[0].range, 10);
//! println!("{} pages selected", pages.len());
//!
//! let reader = PdfReader::new();
//! let loaded = reader.load(&PathBuf::from("report.pdf")).await?;
//!
//! let writer = PdfWriter::new();
//! writer.save(&loaded.document, &PathBuf::from("copy.pdf")).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod merge;
pub mod output;

pub use config::Config;
pub use error::{PdfzusError, Result};

/// Version string from the crate manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name from the crate manifest.
pub const NAME: &str = env!("CARGO_PKG_NAME");
