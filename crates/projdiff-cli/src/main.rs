//! projdiff CLI
//!
//! Command-line interface for project conversion reconciliation

use clap::{Parser, Subcommand, ValueEnum};
use projdiff_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    /// Human-readable logs on stderr
    Pretty,
    /// JSON logs on stderr
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "projdiff")]
#[command(about = "projdiff - Reconcile a project before and after conversion", long_about = None)]
struct Cli {
    /// Log output format
    #[arg(long, global = true, value_enum, default_value = "pretty")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the reconciliation report to stdout
    Show(commands::show::ShowArgs),
    /// Write the reconciliation report file
    Report(commands::report::ReportArgs),
}

fn main() {
    let cli = Cli::parse();

    logging_facility::init(match cli.log_format {
        LogFormat::Pretty => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let result = match cli.command {
        Commands::Show(args) => commands::show::execute(args),
        Commands::Report(args) => commands::report::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
