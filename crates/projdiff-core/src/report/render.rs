//! Plain-text report renderer.
//!
//! Line markers:
//!
//! | marker | meaning |
//! |---|---|
//! | `-` | defaulted: the explicit entry is redundant after conversion |
//! | `=` | not defaulted: the entry was removed by the conversion |
//! | `~` | changed: same entry, different value or metadata |
//! | `+` | introduced by the conversion, or part of a group that disappeared |

use crate::diff::model::{ItemsDiff, ProjectDiff, PropertiesDiff};
use crate::model::Item;
use crate::options::ReconcileOptions;

pub const MARKER_DEFAULTED: char = '-';
pub const MARKER_NOT_DEFAULTED: char = '=';
pub const MARKER_CHANGED: char = '~';
pub const MARKER_INTRODUCED: char = '+';

const DEFAULTED_PROPERTIES_TITLE: &str = "Properties that no longer need to be set:";
const NOT_DEFAULTED_PROPERTIES_TITLE: &str = "Properties that still differ from their defaults:";
const CHANGED_PROPERTIES_TITLE: &str = "Properties whose value changed:";

/// Render the full report: properties first, then one block per item group.
pub fn render_report(diff: &ProjectDiff, options: &ReconcileOptions) -> Vec<String> {
    let mut lines = render_properties(&diff.properties);

    for items_diff in &diff.items {
        // Private collections carry no user-facing value.
        if options.is_internal_group(&items_diff.group_key) {
            continue;
        }
        lines.extend(render_items(items_diff));
    }

    lines
}

/// Render the properties section; empty buckets produce no lines.
pub fn render_properties(diff: &PropertiesDiff) -> Vec<String> {
    let mut lines = Vec::new();

    if !diff.defaulted.is_empty() {
        lines.push(DEFAULTED_PROPERTIES_TITLE.to_string());
        lines.extend(diff.defaulted.iter().map(|p| {
            format!("{} {}={}", MARKER_DEFAULTED, p.name, p.evaluated_value)
        }));
        lines.push(String::new());
    }

    if !diff.not_defaulted.is_empty() {
        lines.push(NOT_DEFAULTED_PROPERTIES_TITLE.to_string());
        lines.extend(diff.not_defaulted.iter().map(|p| {
            format!("{} {}={}", MARKER_NOT_DEFAULTED, p.name, p.evaluated_value)
        }));
        lines.push(String::new());
    }

    if !diff.changed.is_empty() {
        lines.push(CHANGED_PROPERTIES_TITLE.to_string());
        lines.extend(diff.changed.iter().map(|c| {
            format!(
                "{} {}: {} -> {}",
                MARKER_CHANGED, c.old.name, c.old.evaluated_value, c.new.evaluated_value
            )
        }));
        lines.push(String::new());
    }

    lines
}

fn push_items(lines: &mut Vec<String>, marker: char, items: &[Item]) {
    lines.extend(items.iter().map(|i| format!("{} {}", marker, i.identity)));
}

/// Render one group block, or nothing when every bucket is empty.
pub fn render_items(diff: &ItemsDiff) -> Vec<String> {
    let mut lines = Vec::new();
    if diff.is_empty() {
        return lines;
    }

    lines.push(format!("{} items:", diff.group_key));
    push_items(&mut lines, MARKER_DEFAULTED, &diff.defaulted_items);
    push_items(&mut lines, MARKER_NOT_DEFAULTED, &diff.not_defaulted_items);
    push_items(&mut lines, MARKER_CHANGED, &diff.changed_items);
    push_items(&mut lines, MARKER_INTRODUCED, &diff.introduced_items);
    push_items(&mut lines, MARKER_INTRODUCED, &diff.absent_items);
    lines.push(String::new());

    lines
}
