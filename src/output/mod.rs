//! Output and display functionality for pdfzus.
//!
//! This module handles user-facing terminal output. All progress and
//! status messages go through [`OutputFormatter`] so verbosity and color
//! handling stay in one place.

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};
