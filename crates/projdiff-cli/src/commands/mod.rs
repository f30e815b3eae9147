//! CLI subcommands

pub mod report;
pub mod show;

use clap::Args;
use projdiff_core::{ProjectState, ReconcileOptions, Result};
use std::path::PathBuf;

/// Inputs shared by every command that runs a reconciliation
#[derive(Debug, Args)]
pub struct ReconcileInputs {
    /// Snapshot of the project before conversion (JSON)
    #[arg(long)]
    pub before: PathBuf,

    /// Snapshot of the project after conversion (JSON)
    #[arg(long)]
    pub after: PathBuf,

    /// Options file (TOML); defaults apply when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also report groups that exist only after conversion
    #[arg(long)]
    pub introduced_groups: bool,
}

impl ReconcileInputs {
    /// Load both snapshots and the effective options
    pub fn load(&self) -> Result<(ProjectState, ProjectState, ReconcileOptions)> {
        let mut options = match &self.config {
            Some(path) => ReconcileOptions::load(path)?,
            None => ReconcileOptions::default(),
        };
        if self.introduced_groups {
            options.report_introduced_groups = true;
        }

        let source = ProjectState::load_json(&self.before)?;
        let target = ProjectState::load_json(&self.after)?;
        tracing::debug!(
            source_items = source.items.len(),
            target_items = target.items.len(),
            "snapshots loaded"
        );

        Ok((source, target, options))
    }
}
