#![allow(clippy::unwrap_used, clippy::expect_used)]

use projdiff_core::errors::{DiffError, ExError, ExErrorKind, SnapshotSide};
use projdiff_core::{ProjectState, ReconcileOptions};
use std::path::Path;

#[test]
fn test_missing_snapshot_file_maps_to_io() {
    let err = ProjectState::load_json(Path::new("/nonexistent/before.json")).unwrap_err();
    let ex: ExError = (&err).into();

    assert_eq!(ex.kind(), ExErrorKind::Io);
    assert_eq!(ex.path(), Some(Path::new("/nonexistent/before.json")));
    assert!(err.to_string().contains("/nonexistent/before.json"));
}

#[test]
fn test_malformed_snapshot_maps_to_serialization() {
    let err = ProjectState::from_json_str("{\"items\": 3}").unwrap_err();
    assert!(matches!(err, DiffError::Serialization { .. }));
    assert_eq!(ExError::from(err).code(), "ERR_SERIALIZATION");
}

#[test]
fn test_unknown_option_is_invalid_config() {
    let err = ReconcileOptions::from_toml_str("page = \"Page\"\n").unwrap_err();
    assert_eq!(ExError::from(err).kind(), ExErrorKind::InvalidConfig);
}

#[test]
fn test_report_file_name_with_separator_is_rejected() {
    let err = ReconcileOptions::from_toml_str("report_file_name = \"out/report.txt\"\n").unwrap_err();
    assert!(matches!(err, DiffError::InvalidConfig { .. }));
}

#[test]
fn test_invalid_snapshot_display_names_side() {
    let err = DiffError::InvalidSnapshot {
        side: SnapshotSide::Target,
        reason: "item at index 0 has an empty group key".to_string(),
    };
    let ex = ExError::from(&err).with_op("reconcile");

    assert_eq!(ex.side(), Some(SnapshotSide::Target));
    assert_eq!(
        ex.to_string(),
        "[ERR_INVALID_INPUT] in operation 'reconcile': item at index 0 has an empty group key (side: target)"
    );
}
