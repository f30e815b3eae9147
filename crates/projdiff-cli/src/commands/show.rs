//! Show command
//!
//! Usage: projdiff show --before <FILE> --after <FILE> [--config <FILE>]

use super::ReconcileInputs;
use clap::Args;
use projdiff_core::{log_op_end, log_op_error, log_op_start};
use projdiff_core::{reconcile, render_report, ExError};
use std::time::Instant;

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub inputs: ReconcileInputs,
}

/// Execute show command
pub fn execute(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let started = Instant::now();
    log_op_start!("cli_show");

    let result = args.inputs.load().and_then(|(source, target, options)| {
        reconcile(&source, &target, &options).map(|diff| render_report(&diff, &options))
    });

    let duration_ms = started.elapsed().as_millis() as u64;
    match result {
        Ok(lines) => {
            for line in &lines {
                println!("{}", line);
            }
            log_op_end!(
                "cli_show",
                duration_ms = duration_ms,
                line_count = lines.len() as u64
            );
            Ok(())
        }
        Err(err) => {
            log_op_error!("cli_show", &err, duration_ms = duration_ms);
            Err(ExError::from(err).with_op("show").into())
        }
    }
}
