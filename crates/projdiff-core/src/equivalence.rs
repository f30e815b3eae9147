//! Item equivalence strategies.
//!
//! Reconciliation needs two notions of "the same item": same logical entry
//! (group + identity) and unchanged entry (group + identity + metadata).
//! Both are expressed through [`ItemEquivalence`], which maps an item to a
//! normalized [`EquivalenceKey`]. Equality and hashing both come from that
//! key, so every strategy is reflexive, symmetric, transitive and consistent
//! with `Hash` without extra work.
//!
//! All comparisons are case-insensitive.

use crate::model::Item;
use std::collections::HashSet;

/// Case folding used for every name, identity and value comparison
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Normalized comparison key produced by an [`ItemEquivalence`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EquivalenceKey {
    group_key: String,
    identity: String,
    metadata: Option<Vec<(String, String)>>,
}

/// Strategy deciding when two items are "the same"
pub trait ItemEquivalence {
    /// Normalized key; two items are equivalent iff their keys are equal
    fn key(&self, item: &Item) -> EquivalenceKey;

    fn equivalent(&self, a: &Item, b: &Item) -> bool {
        self.key(a) == self.key(b)
    }
}

/// Same group key and identity, metadata ignored
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityEquivalence;

impl ItemEquivalence for IdentityEquivalence {
    fn key(&self, item: &Item) -> EquivalenceKey {
        EquivalenceKey {
            group_key: fold_case(&item.group_key),
            identity: fold_case(&item.identity),
            metadata: None,
        }
    }
}

/// Same group key, identity and complete metadata (order-independent)
#[derive(Debug, Clone, Copy, Default)]
pub struct FullEquivalence;

impl ItemEquivalence for FullEquivalence {
    fn key(&self, item: &Item) -> EquivalenceKey {
        let mut metadata: Vec<(String, String)> = item
            .metadata
            .iter()
            .map(|(k, v)| (fold_case(k), fold_case(v)))
            .collect();
        metadata.sort();

        EquivalenceKey {
            group_key: fold_case(&item.group_key),
            identity: fold_case(&item.identity),
            metadata: Some(metadata),
        }
    }
}

/// Distinct items of `first` that have an equivalent in `second`.
///
/// Keeps `first`'s order; among equivalent items of `first` only the first
/// occurrence is returned.
pub fn intersect<'a, E: ItemEquivalence + ?Sized>(
    first: &[&'a Item],
    second: &[&Item],
    eq: &E,
) -> Vec<&'a Item> {
    let lookup: HashSet<EquivalenceKey> = second.iter().map(|i| eq.key(i)).collect();
    let mut seen: HashSet<EquivalenceKey> = HashSet::new();
    first
        .iter()
        .filter(|item| {
            let key = eq.key(item);
            lookup.contains(&key) && seen.insert(key)
        })
        .copied()
        .collect()
}

/// Distinct items of `first` that have no equivalent in `second`.
///
/// Same ordering and de-duplication rules as [`intersect`].
pub fn except<'a, E: ItemEquivalence + ?Sized>(
    first: &[&'a Item],
    second: &[&Item],
    eq: &E,
) -> Vec<&'a Item> {
    let lookup: HashSet<EquivalenceKey> = second.iter().map(|i| eq.key(i)).collect();
    let mut seen: HashSet<EquivalenceKey> = HashSet::new();
    first
        .iter()
        .filter(|item| {
            let key = eq.key(item);
            !lookup.contains(&key) && seen.insert(key)
        })
        .copied()
        .collect()
}
