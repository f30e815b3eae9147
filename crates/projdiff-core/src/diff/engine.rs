//! Reconciliation entry point.
//!
//! [`reconcile`] is a pure function of its two snapshots: it never mutates
//! them, keeps no state between calls and does not log.

use crate::diff::items::diff_items;
use crate::diff::model::ProjectDiff;
use crate::diff::properties::diff_properties;
use crate::errors::{Result, SnapshotSide};
use crate::model::snapshot::validate_snapshot;
use crate::model::ProjectSnapshot;
use crate::options::ReconcileOptions;

/// Reconcile a source ("before") snapshot with a target ("after") snapshot.
///
/// Both snapshots are validated before any classification happens, so an
/// error never comes with a partial diff.
///
/// # Errors
///
/// - `InvalidSnapshot` if either snapshot has a blank property name or
///   group key
pub fn reconcile<S, T>(source: &S, target: &T, options: &ReconcileOptions) -> Result<ProjectDiff>
where
    S: ProjectSnapshot + ?Sized,
    T: ProjectSnapshot + ?Sized,
{
    validate_snapshot(source, SnapshotSide::Source)?;
    validate_snapshot(target, SnapshotSide::Target)?;

    Ok(ProjectDiff {
        properties: diff_properties(source, target),
        items: diff_items(source, target, options),
    })
}
