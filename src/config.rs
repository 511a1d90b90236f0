//! Configuration for a merge run.
//!
//! [`Config`] is the validated, CLI-independent description of one merge:
//! which files to read in which order, where to write the result, which
//! raw `--range` flag values apply and how chatty the run should be. The
//! CLI layer builds it, the merge engine consumes it.

use anyhow::{Result, bail};
use std::path::PathBuf;

/// Configuration for a merge run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input PDF files, in merge order.
    pub inputs: Vec<PathBuf>,

    /// Output file path.
    pub output: PathBuf,

    /// Raw `--range` flag values, in command-line order.
    pub ranges: Vec<String>,

    /// Whether to print a progress line for each input file.
    pub verbose: bool,
}

impl Config {
    /// Validate settings that can be checked without touching the filesystem.
    ///
    /// The two-input minimum and the range-flag syntax are enforced by the
    /// merge engine, which reports them as typed errors.
    ///
    /// # Errors
    ///
    /// Returns an error if no inputs were given, the output path is empty,
    /// or the output path is also listed as an input.
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            bail!("No input files were given");
        }

        if self.output.as_os_str().is_empty() {
            bail!("Output path is empty");
        }

        if self.inputs.contains(&self.output) {
            bail!(
                "Output file {} is also an input file",
                self.output.display()
            );
        }

        Ok(())
    }
}
