//! End-to-end reconciliation scenarios over in-memory snapshots.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{converted_desktop_project, identities, legacy_desktop_project};
use projdiff_core::errors::{DiffError, SnapshotSide};
use projdiff_core::{reconcile, Item, ProjectDiff, ProjectState, Property, ReconcileOptions};

fn group<'a>(diff: &'a ProjectDiff, key: &str) -> &'a projdiff_core::ItemsDiff {
    diff.items
        .iter()
        .find(|d| d.group_key == key)
        .unwrap_or_else(|| panic!("no diff entry for group {}", key))
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn test_target_framework_change_is_reported_with_both_records() {
    let source = ProjectState::new().with_property(Property::defined("TargetFramework", "net472"));
    let target = ProjectState::new().with_property(Property::defined("TargetFramework", "net5.0"));

    let diff = reconcile(&source, &target, &ReconcileOptions::default()).unwrap();

    assert!(diff.properties.defaulted.is_empty());
    assert_eq!(diff.properties.changed.len(), 1);
    assert_eq!(diff.properties.changed[0].old.evaluated_value, "net472");
    assert_eq!(diff.properties.changed[0].new.evaluated_value, "net5.0");
}

#[test]
fn test_value_comparison_ignores_case() {
    let source = ProjectState::new().with_property(Property::defined("TargetFramework", "net472"));
    let target = ProjectState::new().with_property(Property::inherited("targetframework", "NET472"));

    let diff = reconcile(&source, &target, &ReconcileOptions::default()).unwrap();

    assert_eq!(diff.properties.defaulted.len(), 1);
    assert_eq!(diff.properties.defaulted[0].evaluated_value, "NET472");
    assert!(diff.properties.changed.is_empty());
}

#[test]
fn test_every_defined_property_lands_in_exactly_one_bucket() {
    let source = legacy_desktop_project();
    let target = converted_desktop_project();

    let diff = reconcile(&source, &target, &ReconcileOptions::default()).unwrap();

    let mut classified: Vec<String> = diff
        .properties
        .defaulted
        .iter()
        .map(|p| p.name.clone())
        .chain(diff.properties.changed.iter().map(|c| c.old.name.clone()))
        .collect();
    classified.sort();

    assert_eq!(
        classified,
        vec!["FileAlignment", "OutputType", "TargetFramework"]
    );
    assert!(diff.properties.not_defaulted.is_empty());
}

#[test]
fn test_last_definition_wins() {
    let source = ProjectState::new()
        .with_property(Property::defined("Configuration", "Debug"))
        .with_property(Property::defined("Configuration", "Release"));
    let target = ProjectState::new().with_property(Property::inherited("Configuration", "Release"));

    let diff = reconcile(&source, &target, &ReconcileOptions::default()).unwrap();

    assert_eq!(diff.properties.defaulted.len(), 1);
    assert!(diff.properties.changed.is_empty());
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

#[test]
fn test_desktop_conversion_items() {
    let diff = reconcile(
        &legacy_desktop_project(),
        &converted_desktop_project(),
        &ReconcileOptions::default(),
    )
    .unwrap();

    let compile = group(&diff, "Compile");
    assert_eq!(identities(&compile.defaulted_items), vec!["Program.cs"]);
    assert_eq!(identities(&compile.changed_items), vec!["Foo.cs"]);
    assert_eq!(identities(&compile.introduced_items), vec!["Generated.cs"]);
    assert_eq!(identities(&compile.not_defaulted_items), vec!["Legacy.cs"]);
    assert!(compile.absent_items.is_empty());

    // App.xaml moved from ApplicationDefinition into Page: not an introduction.
    let page = group(&diff, "Page");
    assert_eq!(identities(&page.defaulted_items), vec!["MainWindow.xaml"]);
    assert!(page.introduced_items.is_empty());

    let app = group(&diff, "ApplicationDefinition");
    assert_eq!(identities(&app.absent_items), vec!["App.xaml"]);

    let reference = group(&diff, "Reference");
    assert_eq!(identities(&reference.absent_items), vec!["System.Deployment"]);

    // Target-only groups are not reported by default.
    assert!(diff.items.iter().all(|d| d.group_key != "None"));
}

#[test]
fn test_group_order_is_matched_then_absent() {
    let diff = reconcile(
        &legacy_desktop_project(),
        &converted_desktop_project(),
        &ReconcileOptions::default(),
    )
    .unwrap();

    let keys: Vec<&str> = diff.items.iter().map(|d| d.group_key.as_str()).collect();
    assert_eq!(
        keys,
        vec!["Compile", "Page", "ApplicationDefinition", "Reference", "_Internal"]
    );
}

#[test]
fn test_introduced_groups_reported_when_enabled() {
    let options = ReconcileOptions {
        report_introduced_groups: true,
        ..ReconcileOptions::default()
    };
    let diff = reconcile(&legacy_desktop_project(), &converted_desktop_project(), &options).unwrap();

    let none = group(&diff, "None");
    assert_eq!(identities(&none.introduced_items), vec!["app.manifest"]);
    assert_eq!(diff.items.last().map(|d| d.group_key.as_str()), Some("None"));
}

#[test]
fn test_buckets_within_a_group_are_disjoint() {
    let diff = reconcile(
        &legacy_desktop_project(),
        &converted_desktop_project(),
        &ReconcileOptions::default(),
    )
    .unwrap();

    for entry in &diff.items {
        let mut seen = std::collections::HashSet::new();
        for item in entry
            .defaulted_items
            .iter()
            .chain(&entry.changed_items)
            .chain(&entry.introduced_items)
            .chain(&entry.not_defaulted_items)
        {
            assert!(
                seen.insert(item.identity.to_lowercase()),
                "{} classified twice in {}",
                item.identity,
                entry.group_key
            );
        }
    }
}

#[test]
fn test_identical_snapshots_only_default() {
    let project = legacy_desktop_project();
    let diff = reconcile(&project, &project, &ReconcileOptions::default()).unwrap();

    assert!(diff.properties.changed.is_empty());
    for entry in &diff.items {
        assert!(entry.changed_items.is_empty());
        assert!(entry.introduced_items.is_empty());
        assert!(entry.not_defaulted_items.is_empty());
        assert!(entry.absent_items.is_empty());
    }
}

#[test]
fn test_reconcile_is_repeatable() {
    let source = legacy_desktop_project();
    let target = converted_desktop_project();
    let options = ReconcileOptions::default();

    let first = reconcile(&source, &target, &options).unwrap();
    let second = reconcile(&source, &target, &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_duplicate_items_reported_once() {
    let source = ProjectState::new()
        .with_item(Item::new("Compile", "A.cs"))
        .with_item(Item::new("Compile", "a.cs"));
    let target = ProjectState::new();

    let diff = reconcile(&source, &target, &ReconcileOptions::default()).unwrap();
    // Absent groups keep every record as evaluated.
    assert_eq!(diff.items[0].absent_items.len(), 2);

    let target = ProjectState::new().with_item(Item::new("Compile", "B.cs"));
    let diff = reconcile(&source, &target, &ReconcileOptions::default()).unwrap();
    assert_eq!(identities(&diff.items[0].not_defaulted_items), vec!["A.cs"]);
}

#[test]
fn test_application_definition_moved_into_new_page_group() {
    let source = ProjectState::new().with_item(Item::new("ApplicationDefinition", "App.xaml"));
    let target = ProjectState::new().with_item(Item::new("Page", "App.xaml"));

    for report_introduced_groups in [false, true] {
        let options = ReconcileOptions {
            report_introduced_groups,
            ..ReconcileOptions::default()
        };
        let diff = reconcile(&source, &target, &options).unwrap();

        let app = group(&diff, "ApplicationDefinition");
        assert_eq!(identities(&app.absent_items), vec!["App.xaml"]);
        assert!(
            diff.items
                .iter()
                .filter(|d| d.group_key.eq_ignore_ascii_case("Page"))
                .all(|d| d.introduced_items.is_empty()),
            "App.xaml reported as introduced (report_introduced_groups = {})",
            report_introduced_groups
        );
        assert_eq!(diff.items.len(), 1);
    }
}

#[test]
fn test_custom_group_names_drive_the_exclusion() {
    let options = ReconcileOptions {
        page_group: "Content".to_string(),
        application_definition_group: "EntryPoint".to_string(),
        ..ReconcileOptions::default()
    };
    let source = ProjectState::new()
        .with_item(Item::new("EntryPoint", "Main.xml"))
        .with_item(Item::new("Content", "a.xml"));
    let target = ProjectState::new()
        .with_item(Item::new("Content", "a.xml"))
        .with_item(Item::new("Content", "Main.xml"));

    let diff = reconcile(&source, &target, &options).unwrap();
    assert!(group(&diff, "Content").introduced_items.is_empty());
}

// ---------------------------------------------------------------------------
// Invalid input
// ---------------------------------------------------------------------------

#[test]
fn test_blank_group_key_fails_fast() {
    let source = ProjectState::new().with_item(Item::new(" ", "x.cs"));
    let target = ProjectState::new();

    let err = reconcile(&source, &target, &ReconcileOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        DiffError::InvalidSnapshot {
            side: SnapshotSide::Source,
            ..
        }
    ));
}

#[test]
fn test_blank_property_name_in_target_fails_fast() {
    let source = ProjectState::new();
    let target = ProjectState::new().with_property(Property::inherited("", "x"));

    let err = reconcile(&source, &target, &ReconcileOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        DiffError::InvalidSnapshot {
            side: SnapshotSide::Target,
            ..
        }
    ));
}
