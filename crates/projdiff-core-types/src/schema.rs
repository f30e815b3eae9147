//! Canonical schema constants for structured logging
//!
//! These constants keep field and event names consistent between the
//! logging macros, the report writer and the tests that assert on captured
//! events. `tracing` field names are identifiers, so emitters spell them
//! out literally; the capture layer and the tests read them back through
//! these constants.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_RUN_ID: &str = "run_id";

// Report output
pub const FIELD_LINE_COUNT: &str = "line_count";
pub const FIELD_PATH: &str = "path";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
