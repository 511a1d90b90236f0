//! CLI argument parsing for pdfzus-merge.
//!
//! The `clap` derive on [`Cli`] is the whole command-line surface: it
//! parses arguments, generates the help text, and converts into a
//! validated [`Config`] for the merge engine.
//!
//! # Examples
//!
//! ```no_run
//! use pdfzus::cli::Cli;
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! println!("{} inputs given", cli.inputs.len());
//! ```

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::{PdfzusError, Result};

/// Merge PDF files into a single document.
///
/// pdfzus-merge appends the pages of each input file in the order the
/// files are given. A `--range` flag restricts which pages of one input
/// are kept; files without a matching flag contribute all their pages.
#[derive(Parser, Debug)]
#[command(name = "pdfzus-merge")]
#[command(version)]
#[command(about = "Merge PDF files into a single document", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// PDF files to merge, in order
    ///
    /// At least two files are required. Pages are appended in the
    /// order the files are given.
    ///
    /// Examples:
    ///   pdfzus-merge a.pdf b.pdf -o combined.pdf
    ///   pdfzus-merge intro.pdf main.pdf appendix.pdf
    #[arg(required = true, value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Where to write the merged document
    ///
    /// Missing parent directories are created. An existing file at this
    /// location is overwritten.
    #[arg(short, long, value_name = "FILE", default_value = "merged.pdf")]
    pub output: PathBuf,

    /// Page range for one input file, as FILE=PAGES (repeatable)
    ///
    /// PAGES is a comma-separated list of 1-based page numbers and
    /// inclusive ranges, e.g. "1-3,5". The FILE half may be spelled
    /// exactly as the input argument, as an absolute path, or as the
    /// bare filename. A range that selects no valid page falls back to
    /// all pages with a warning.
    ///
    /// Examples:
    ///   pdfzus-merge a.pdf b.pdf --range a.pdf=1-3,5
    ///   pdfzus-merge a.pdf b.pdf -r a.pdf=2 -r b.pdf=1
    #[arg(short, long, value_name = "FILE=PAGES")]
    pub range: Vec<String>,

    /// Verbose output - print a progress line for each input file
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Convert CLI arguments to a validated [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`PdfzusError::InvalidConfig`] if the arguments fail
    /// configuration validation.
    pub fn to_config(&self) -> Result<Config> {
        let config = Config {
            inputs: self.inputs.clone(),
            output: self.output.clone(),
            ranges: self.range.clone(),
            verbose: self.verbose,
        };

        config
            .validate()
            .map_err(|e| PdfzusError::invalid_config(e.to_string()))?;

        Ok(config)
    }
}
