//! Terminal output for a merge run.
//!
//! [`OutputFormatter`] decides which messages appear (debug lines need
//! `--verbose`) and whether ANSI color gets applied; callers never
//! print directly.
//!
//! # Examples
//!
//! ```
//! use pdfzus::output::OutputFormatter;
//!
//! let formatter = OutputFormatter::new(false);
//! formatter.info("Loading inputs");
//! formatter.success("Merge complete");
//! formatter.debug("Only shown in verbose mode");
//! ```

use crate::config::Config;
use std::io;

/// Category a printed line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Plain informational line.
    Info,
    /// Completed operation.
    Success,
    /// Recoverable problem.
    Warning,
    /// Failure report.
    Error,
    /// Verbose-only detail.
    Debug,
}

impl MessageLevel {
    /// Symbol printed before messages of this level.
    fn prefix(self) -> &'static str {
        match self {
            Self::Info => "",
            Self::Success => "✓ ",
            Self::Warning => "⚠ ",
            Self::Error => "✗ ",
            Self::Debug => "→ ",
        }
    }

    /// ANSI color sequence for this level, if it has one.
    fn color(self) -> Option<&'static str> {
        match self {
            Self::Info => None,
            Self::Success => Some("\x1b[32m"), // green
            Self::Warning => Some("\x1b[33m"), // yellow
            Self::Error => Some("\x1b[31m"),   // red
            Self::Debug => Some("\x1b[36m"),   // cyan
        }
    }
}

/// Prints status lines, with a verbose tier and optional color.
#[derive(Debug, Clone)]
pub struct OutputFormatter {
    verbose: bool,
    use_color: bool,
}

impl OutputFormatter {
    /// Create a formatter; `verbose` enables the debug tier.
    ///
    /// Color is used when stdout is a terminal and `TERM` is set.
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            use_color: Self::color_enabled(),
        }
    }

    /// Create a formatter from the run configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.verbose)
    }

    /// Shorthand for a formatter with the debug tier enabled.
    pub fn verbose() -> Self {
        Self::new(true)
    }

    fn color_enabled() -> bool {
        use std::io::IsTerminal;
        io::stdout().is_terminal() && std::env::var("TERM").is_ok()
    }

    /// Print a plain informational line.
    pub fn info(&self, message: &str) {
        self.emit(MessageLevel::Info, message);
    }

    /// Print a success line.
    pub fn success(&self, message: &str) {
        self.emit(MessageLevel::Success, message);
    }

    /// Print a warning line.
    pub fn warning(&self, message: &str) {
        self.emit(MessageLevel::Warning, message);
    }

    /// Print an error line.
    pub fn error(&self, message: &str) {
        self.emit(MessageLevel::Error, message);
    }

    /// Print a detail line, suppressed unless verbose.
    pub fn debug(&self, message: &str) {
        if self.verbose {
            self.emit(MessageLevel::Debug, message);
        }
    }

    /// Whether the debug tier is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    fn emit(&self, level: MessageLevel, message: &str) {
        let prefix = level.prefix();

        match level.color() {
            Some(color) if self.use_color => {
                println!("{color}{prefix}{message}\x1b[0m");
            }
            _ => println!("{prefix}{message}"),
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}
