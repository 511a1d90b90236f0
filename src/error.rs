//! Error types for pdfzus operations.
//!
//! This module provides error handling for all pdfzus operations, with
//! specific error types for the different failure scenarios:
//!
//! - Range-flag errors (malformed or empty `--range` values)
//! - File errors (missing inputs, unreadable PDFs)
//! - Output errors (directory creation, writing)
//! - Merge errors (structural problems while assembling the document)
//!
//! Every error maps to a process exit code via [`PdfzusError::exit_code`].

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfzus operations.
pub type Result<T> = std::result::Result<T, PdfzusError>;

/// Main error type for pdfzus operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfzusError {
    /// A `--range` flag is not of the form `FILE=PAGES`.
    #[error("Invalid range specification '{token}': expected FILE=PAGES")]
    InvalidRangeSpec {
        /// The flag value as typed on the command line.
        token: String,
    },

    /// A `--range` flag has a whitespace-only page-range half.
    #[error("Empty page range in '{token}'")]
    EmptyRange {
        /// The flag value as typed on the command line.
        token: String,
    },

    /// An input file does not exist.
    #[error("File not found: {}", .path.display())]
    FileNotFound {
        /// The path that does not exist.
        path: PathBuf,
    },

    /// Fewer than two input files were supplied.
    #[error("At least two input PDF files are required (got {count})")]
    NotEnoughInputs {
        /// Number of input files supplied.
        count: usize,
    },

    /// An input file exists but could not be parsed as a PDF.
    #[error("Failed to load PDF {}: {reason}", .path.display())]
    FailedToLoadPdf {
        /// Path to the file that failed to load.
        path: PathBuf,
        /// Underlying parse failure.
        reason: String,
    },

    /// The output file or one of its parent directories could not be created.
    #[error("Failed to create output {}: {}", .path.display(), .source)]
    FailedToCreateOutput {
        /// Path that could not be created.
        path: PathBuf,
        /// The OS-level failure.
        #[source]
        source: io::Error,
    },

    /// The output file could not be written.
    #[error("Failed to write {}: {}", .path.display(), .source)]
    FailedToWrite {
        /// Path that could not be written.
        path: PathBuf,
        /// The OS-level failure.
        #[source]
        source: io::Error,
    },

    /// The merged document could not be assembled.
    #[error("Merge operation failed: {reason}")]
    MergeFailed {
        /// Description of the structural problem.
        reason: String,
    },

    /// The resolved configuration is invalid.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the invalid setting.
        message: String,
    },

    /// An I/O failure with no more specific classification.
    #[error("I/O error: {source}")]
    Io {
        /// The OS-level failure.
        #[from]
        source: io::Error,
    },

    /// Catch-all for errors that carry only a message.
    #[error("{message}")]
    Other {
        /// The error message.
        message: String,
    },
}

impl PdfzusError {
    /// Create an [`InvalidRangeSpec`](Self::InvalidRangeSpec) error.
    pub fn invalid_range_spec(token: impl Into<String>) -> Self {
        Self::InvalidRangeSpec {
            token: token.into(),
        }
    }

    /// Create an [`EmptyRange`](Self::EmptyRange) error.
    pub fn empty_range(token: impl Into<String>) -> Self {
        Self::EmptyRange {
            token: token.into(),
        }
    }

    /// Create a [`FileNotFound`](Self::FileNotFound) error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a [`FailedToLoadPdf`](Self::FailedToLoadPdf) error.
    pub fn failed_to_load_pdf(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a [`MergeFailed`](Self::MergeFailed) error.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }

    /// Create an [`InvalidConfig`](Self::InvalidConfig) error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a generic [`Other`](Self::Other) error.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the process exit code for this error.
    ///
    /// Usage and range-flag problems exit with 1, missing files with 2,
    /// unreadable PDFs with 3, output I/O failures with 5 and merge
    /// failures with 6.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidRangeSpec { .. }
            | Self::EmptyRange { .. }
            | Self::NotEnoughInputs { .. }
            | Self::InvalidConfig { .. }
            | Self::Other { .. } => 1,
            Self::FileNotFound { .. } => 2,
            Self::FailedToLoadPdf { .. } => 3,
            Self::FailedToCreateOutput { .. } | Self::FailedToWrite { .. } | Self::Io { .. } => 5,
            Self::MergeFailed { .. } => 6,
        }
    }
}

impl From<anyhow::Error> for PdfzusError {
    fn from(err: anyhow::Error) -> Self {
        Self::other(err.to_string())
    }
}
