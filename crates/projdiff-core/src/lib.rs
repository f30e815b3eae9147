//! projdiff core - project conversion reconciliation
//!
//! This crate compares the evaluated state of a project before and after a
//! conversion and reports what changed:
//! - Snapshot model (properties, items, metadata) behind the `ProjectSnapshot` trait
//! - Pluggable item equivalence (identity-only, full)
//! - Reconciliation engine for properties and per-group items
//! - Plain-text report rendering and sinks
//! - Structured errors and logging facilities

pub mod diff;
pub mod equivalence;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod options;
pub mod report;

pub use projdiff_core_types as core_types;

// Re-export commonly used types
pub use diff::{reconcile, ItemsDiff, ProjectDiff, PropertiesDiff, PropertyChange};
pub use equivalence::{FullEquivalence, IdentityEquivalence, ItemEquivalence};
pub use errors::{DiffError, ExError, ExErrorKind, Result, SnapshotSide};
pub use model::{Item, Metadata, ProjectSnapshot, ProjectState, Property};
pub use options::ReconcileOptions;
pub use report::{render_report, write_report, FileSink, ReportSink};
