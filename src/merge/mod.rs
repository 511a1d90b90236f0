//! The merge pipeline.
//!
//! Everything between parsed arguments and the written output lives
//! here: range flag parsing and per-file page selection ([`ranges`]),
//! document concatenation with page tree assembly ([`merger`]), and the
//! fallback to all pages when a range cannot be interpreted.
//!
//! # Examples
//!
//! ```no_run
//! use pdfzus::config::Config;
//! use pdfzus::merge::merge_files;
//! use pdfzus::output::OutputFormatter;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     inputs: vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")],
//!     output: PathBuf::from("merged.pdf"),
//!     ranges: vec!["b.pdf=1,3-5".to_string()],
//!     verbose: false,
//! };
//!
//! let formatter = OutputFormatter::from_config(&config);
//! let outcome = merge_files(&config, &formatter).await?;
//! println!("Merged {} pages", outcome.total_pages);
//! # Ok(())
//! # }
//! ```

pub mod merger;
pub mod ranges;

pub use merger::{MergeOutcome, MergeResult, Merger, PageSelection};
pub use ranges::{
    RangeEntry, find_range_for_file, parse_range_spec, parse_range_specs, resolve_page_range,
};

use crate::config::Config;
use crate::error::Result;
use crate::io::PdfWriter;
use crate::output::OutputFormatter;

/// Merge the configured inputs and write the result to the output path.
///
/// Convenience wrapper over [`Merger::merge`] and [`PdfWriter::save`]
/// that also prints the final summary line. Returns a summary of the
/// completed merge.
///
/// # Errors
///
/// Returns an error if the merge or the final write fails. The output
/// file is not created when the merge itself fails.
///
/// # Examples
///
/// ```no_run
/// use pdfzus::config::Config;
/// use pdfzus::merge::merge_files;
/// use pdfzus::output::OutputFormatter;
///
/// # async fn example(config: Config) -> Result<(), Box<dyn std::error::Error>> {
/// let formatter = OutputFormatter::from_config(&config);
/// let outcome = merge_files(&config, &formatter).await?;
/// println!("{} files merged", outcome.files_merged);
/// # Ok(())
/// # }
/// ```
pub async fn merge_files(config: &Config, formatter: &OutputFormatter) -> Result<MergeOutcome> {
    let merger = Merger::new();
    let result = merger.merge(config, formatter).await?;

    let writer = PdfWriter::new();
    writer.save(&result.document, &config.output).await?;

    formatter.success(&format!(
        "Merged {} pages from {} files into {}",
        result.outcome.total_pages,
        result.outcome.files_merged,
        ranges::path_key(&config.output)
    ));

    Ok(result.outcome)
}
