use std::time::Duration;

use anyhow::{Context as _, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::commands::ExitOnErr;
use crate::errors::DdlError;
use crate::oracle::{Connector, OracleConnector};
use crate::services::{ExtractArgs, ExtractSummary, extract_all};
use crate::types::ConnectString;
use crate::utils::ProgressReporter;

/// Shows a spinner while the wrapped connector opens its session.
struct SpinnerConnector<C>(C);

impl<C: Connector> Connector for SpinnerConnector<C> {
    type Session = C::Session;

    fn connect(&self, connect_string: &ConnectString) -> Result<Self::Session, DdlError> {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.cyan} {msg}")
        {
            spinner.set_style(style);
        }
        spinner.set_message(format!("Connecting to '{}'...", connect_string.alias));
        spinner.enable_steady_tick(Duration::from_millis(80));

        let result = self.0.connect(connect_string);

        spinner.finish_and_clear();
        result
    }
}

/// Runs a full extraction, adding the output directory to any failure.
pub fn run<C: Connector>(
    args: &ExtractArgs,
    connector: &C,
    progress: ProgressReporter,
) -> Result<ExtractSummary> {
    extract_all(args, connector, progress)
        .with_context(|| format!("Failed to extract DDL into '{}'", args.output_path))
}

pub fn execute(args: &ExtractArgs) {
    let summary = run(
        args,
        &SpinnerConnector(OracleConnector),
        ProgressReporter::Console,
    )
    .exit_on_err("DDL extraction failed");

    println!(
        "{} Wrote {} DDL file(s) to {}",
        "✅".green(),
        summary.written.len(),
        args.output_path.bold()
    );
}
