//! Item reconciliation.
//!
//! Items are grouped by group key (case-insensitive, first spelling wins,
//! groups in order of first appearance) and each source group is compared
//! with its target counterpart.

use crate::diff::model::ItemsDiff;
use crate::equivalence::{except, fold_case, intersect, FullEquivalence, IdentityEquivalence};
use crate::model::{Item, ProjectSnapshot};
use crate::options::ReconcileOptions;
use std::collections::{HashMap, HashSet};

/// Items of one group, borrowed from a snapshot
#[derive(Debug)]
pub struct ItemGroup<'a> {
    pub key: &'a str,
    pub items: Vec<&'a Item>,
}

/// Group items by key, case-insensitively, preserving first-seen order of
/// groups and item order within each group.
pub fn group_items(items: &[Item]) -> Vec<ItemGroup<'_>> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<ItemGroup<'_>> = Vec::new();

    for item in items {
        let slot = *index.entry(fold_case(&item.group_key)).or_insert_with(|| {
            groups.push(ItemGroup {
                key: &item.group_key,
                items: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].items.push(item);
    }

    groups
}

fn owned(items: Vec<&Item>) -> Vec<Item> {
    items.into_iter().cloned().collect()
}

/// Drop introduced page items that are really reclassified application
/// definitions. Groups other than the page group are left untouched.
fn drop_reclassified(
    group_key: &str,
    introduced: &mut Vec<&Item>,
    reclassified: &HashSet<String>,
    options: &ReconcileOptions,
) {
    if fold_case(group_key) == fold_case(&options.page_group) {
        introduced.retain(|item| !reclassified.contains(&fold_case(&item.identity)));
    }
}

/// Compare one group present in both snapshots.
///
/// `reclassified` holds the folded identities of items from an absent
/// application-definition group; they are dropped from `introduced_items`
/// when `source` is the page group.
pub fn diff_group(
    source: &ItemGroup<'_>,
    target: &ItemGroup<'_>,
    reclassified: &HashSet<String>,
    options: &ReconcileOptions,
) -> ItemsDiff {
    let defaulted = intersect(&target.items, &source.items, &FullEquivalence);
    let same_identity = intersect(&target.items, &source.items, &IdentityEquivalence);
    let changed = except(&same_identity, &defaulted, &FullEquivalence);

    let mut introduced = except(&target.items, &source.items, &IdentityEquivalence);
    drop_reclassified(source.key, &mut introduced, reclassified, options);

    let not_defaulted = except(&source.items, &target.items, &IdentityEquivalence);

    ItemsDiff {
        group_key: source.key.to_string(),
        defaulted_items: owned(defaulted),
        not_defaulted_items: owned(not_defaulted),
        introduced_items: owned(introduced),
        changed_items: owned(changed),
        absent_items: Vec::new(),
    }
}

/// Reconcile the items of two snapshots.
///
/// Output order: groups present in both (source order), then groups
/// present only in the source, then, if
/// [`ReconcileOptions::report_introduced_groups`] is set, groups present
/// only in the target. Without that option target-only groups produce no
/// entry. A target-only page group is filtered like a matched one and
/// omitted when nothing is left.
pub fn diff_items<S, T>(source: &S, target: &T, options: &ReconcileOptions) -> Vec<ItemsDiff>
where
    S: ProjectSnapshot + ?Sized,
    T: ProjectSnapshot + ?Sized,
{
    let source_groups = group_items(source.items());
    let target_groups = group_items(target.items());

    let target_index: HashMap<String, &ItemGroup<'_>> = target_groups
        .iter()
        .map(|g| (fold_case(g.key), g))
        .collect();

    let absent_groups: Vec<&ItemGroup<'_>> = source_groups
        .iter()
        .filter(|g| !target_index.contains_key(&fold_case(g.key)))
        .collect();

    let app_definition_key = fold_case(&options.application_definition_group);
    let reclassified: HashSet<String> = absent_groups
        .iter()
        .filter(|g| fold_case(g.key) == app_definition_key)
        .flat_map(|g| g.items.iter())
        .map(|item| fold_case(&item.identity))
        .collect();

    let mut diffs: Vec<ItemsDiff> = source_groups
        .iter()
        .filter_map(|og| {
            target_index
                .get(&fold_case(og.key))
                .map(|ng| diff_group(og, ng, &reclassified, options))
        })
        .collect();

    diffs.extend(absent_groups.iter().map(|g| ItemsDiff {
        absent_items: g.items.iter().map(|item| (*item).clone()).collect(),
        ..ItemsDiff::empty(g.key)
    }));

    if options.report_introduced_groups {
        let source_keys: HashSet<String> = source_groups.iter().map(|g| fold_case(g.key)).collect();
        diffs.extend(
            target_groups
                .iter()
                .filter(|g| !source_keys.contains(&fold_case(g.key)))
                .filter_map(|g| {
                    let mut introduced = g.items.clone();
                    drop_reclassified(g.key, &mut introduced, &reclassified, options);
                    (!introduced.is_empty()).then(|| ItemsDiff {
                        introduced_items: owned(introduced),
                        ..ItemsDiff::empty(g.key)
                    })
                }),
        );
    }

    diffs
}
