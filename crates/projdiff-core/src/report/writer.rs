//! Caller-level report writing.

use crate::core_types::RunId;
use crate::diff::reconcile;
use crate::errors::{DiffError, Result};
use crate::model::ProjectSnapshot;
use crate::options::ReconcileOptions;
use crate::report::render::render_report;
use crate::report::sink::{FileSink, ReportSink};
use crate::{log_op_end, log_op_error, log_op_start};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Resolve where the report file goes.
///
/// A missing or blank destination means the current working directory.
///
/// # Errors
///
/// - `Io` if the current directory cannot be determined
pub fn report_path(destination: Option<&Path>, options: &ReconcileOptions) -> Result<PathBuf> {
    let dir = match destination {
        Some(dir) if !dir.as_os_str().to_string_lossy().trim().is_empty() => dir.to_path_buf(),
        _ => std::env::current_dir().map_err(|e| DiffError::io(".", e))?,
    };
    Ok(dir.join(&options.report_file_name))
}

/// Reconcile, render and send the report to `sink`.
///
/// # Errors
///
/// - `InvalidSnapshot` from reconciliation
/// - whatever the sink reports
pub fn emit_report<S, T, K>(
    source: &S,
    target: &T,
    sink: &mut K,
    options: &ReconcileOptions,
) -> Result<usize>
where
    S: ProjectSnapshot + ?Sized,
    T: ProjectSnapshot + ?Sized,
    K: ReportSink + ?Sized,
{
    let diff = reconcile(source, target, options)?;
    let lines = render_report(&diff, options);
    sink.write_lines(&lines)?;
    Ok(lines.len())
}

/// Write the report for `source` -> `target` into `destination`.
///
/// The file is named [`ReconcileOptions::report_file_name`]; the directory
/// must already exist. Returns the path written.
///
/// # Errors
///
/// - `InvalidSnapshot` if either snapshot is unusable (nothing is written)
/// - `Io` if the directory cannot be resolved or the file cannot be written
pub fn write_report<S, T>(
    source: &S,
    target: &T,
    destination: Option<&Path>,
    options: &ReconcileOptions,
) -> Result<PathBuf>
where
    S: ProjectSnapshot + ?Sized,
    T: ProjectSnapshot + ?Sized,
{
    let run_id = RunId::new();
    let started = Instant::now();
    log_op_start!("write_report", run_id = run_id.as_str());

    let result = report_path(destination, options).and_then(|path| {
        let mut sink = FileSink::new(&path);
        emit_report(source, target, &mut sink, options).map(|count| (path, count))
    });

    let duration_ms = started.elapsed().as_millis() as u64;
    match result {
        Ok((path, line_count)) => {
            log_op_end!(
                "write_report",
                duration_ms = duration_ms,
                run_id = run_id.as_str(),
                line_count = line_count as u64,
                path = %path.display()
            );
            Ok(path)
        }
        Err(err) => {
            log_op_error!(
                "write_report",
                &err,
                duration_ms = duration_ms,
                run_id = run_id.as_str()
            );
            Err(err)
        }
    }
}
