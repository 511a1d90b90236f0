//! Command-line entry point for pdfzus.

use clap::Parser;
use std::process;

use pdfzus::cli::Cli;
use pdfzus::error::PdfzusError;
use pdfzus::merge;
use pdfzus::output::OutputFormatter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}

/// Turns parsed arguments into a merge run.
async fn run(cli: Cli) -> Result<(), PdfzusError> {
    let config = cli.to_config()?;
    let formatter = OutputFormatter::from_config(&config);

    formatter.debug(&format!("{} v{}", pdfzus::NAME, pdfzus::VERSION));

    merge::merge_files(&config, &formatter).await?;

    Ok(())
}
