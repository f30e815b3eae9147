//! Report command
//!
//! Usage: projdiff report --before <FILE> --after <FILE> [--out <DIR>] [--config <FILE>]

use super::ReconcileInputs;
use clap::Args;
use projdiff_core::{write_report, ExError};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub inputs: ReconcileInputs,

    /// Directory to write the report into (default: current directory)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Execute report command
pub fn execute(args: ReportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (source, target, options) = args
        .inputs
        .load()
        .map_err(|e| ExError::from(e).with_op("report"))?;

    let path = write_report(&source, &target, args.out.as_deref(), &options)
        .map_err(|e| ExError::from(e).with_op("report"))?;

    println!("✓ Report written to {}", path.display());
    Ok(())
}
