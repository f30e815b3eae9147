//! Property reconciliation.

use crate::diff::model::{PropertiesDiff, PropertyChange};
use crate::equivalence::fold_case;
use crate::model::{ProjectSnapshot, Property};
use std::collections::HashSet;

/// Outcome of comparing one explicitly defined property.
///
/// A successful target lookup is either equal or different, so there is no
/// third outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyOutcome {
    /// The explicit setting is redundant in the target
    Defaulted(Property),
    /// The evaluated value differs; source record first
    Changed(PropertyChange),
}

/// Classify a single property name.
///
/// Returns `None` when `name` does not resolve in `source`.
pub fn classify_property<S, T>(source: &S, target: &T, name: &str) -> Option<PropertyOutcome>
where
    S: ProjectSnapshot + ?Sized,
    T: ProjectSnapshot + ?Sized,
{
    let original = source.property(name)?;

    let outcome = match target.property(name) {
        None => PropertyOutcome::Defaulted(original.clone()),
        Some(converted) if original.value_eq(converted) => {
            PropertyOutcome::Defaulted(converted.clone())
        }
        Some(converted) => PropertyOutcome::Changed(PropertyChange {
            old: original.clone(),
            new: converted.clone(),
        }),
    };
    Some(outcome)
}

/// Distinct names of properties defined in the project file itself,
/// in first-seen order.
pub fn defined_property_names<S: ProjectSnapshot + ?Sized>(snapshot: &S) -> Vec<&str> {
    let mut seen: HashSet<String> = HashSet::new();
    snapshot
        .properties()
        .iter()
        .filter(|p| p.is_defined_in_source)
        .filter(|p| seen.insert(fold_case(&p.name)))
        .map(|p| p.name.as_str())
        .collect()
}

/// Compare every explicitly defined source property against the target.
///
/// Inherited properties are never diffed. A name missing from the target
/// counts as defaulted: the converted project simply stopped setting it.
pub fn diff_properties<S, T>(source: &S, target: &T) -> PropertiesDiff
where
    S: ProjectSnapshot + ?Sized,
    T: ProjectSnapshot + ?Sized,
{
    let mut diff = PropertiesDiff::default();

    for name in defined_property_names(source) {
        match classify_property(source, target, name) {
            Some(PropertyOutcome::Defaulted(property)) => diff.defaulted.push(property),
            Some(PropertyOutcome::Changed(change)) => diff.changed.push(change),
            None => continue,
        }
    }

    diff
}
