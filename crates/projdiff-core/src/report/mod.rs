//! Report rendering and persistence.
//!
//! Rendering is pure ([`render_report`] returns lines). Persistence goes
//! through a [`ReportSink`]; [`write_report`] is the file-backed
//! convenience used by the CLI.

pub mod render;
pub mod sink;
pub mod writer;

pub use render::render_report;
pub use sink::{FileSink, ReportSink};
pub use writer::{emit_report, report_path, write_report};
